use db::models::document::Model as Document;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Deserializer};
use util::revalidate::{Revalidator, folder_path};

use crate::error::{ServiceError, ServiceResult};

/// Grade and feedback for one submission.
///
/// `grade` accepts either a JSON string or number and is stored as text.
/// Nothing checks that it is numeric or within 0..=100.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmission {
    #[serde(deserialize_with = "text_or_number")]
    pub grade: String,
    #[serde(default, alias = "correction")]
    pub feedback: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[derive(Clone)]
pub struct GradingService {
    db: DatabaseConnection,
    revalidator: Revalidator,
}

impl GradingService {
    pub fn new(db: DatabaseConnection, revalidator: Revalidator) -> Self {
        Self { db, revalidator }
    }

    /// Overwrites grade and feedback of a document.
    pub async fn grade(&self, document_id: &str, params: GradeSubmission) -> ServiceResult<Document> {
        let document = Document::set_grade(&self.db, document_id, &params.grade, &params.feedback)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Document not found".into()))?;

        tracing::info!(document = %document.id, grade = %params.grade, "grade submitted");
        if let Some(folder) = document.folder.as_deref() {
            self.revalidator.revalidate(folder_path(folder));
        }
        Ok(document)
    }
}
