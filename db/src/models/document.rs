//! Student submissions.
//!
//! One row per uploaded file. `folder_id` is the stable link to the owning folder;
//! `folder` keeps the folder's name as it was at upload time.

use std::fmt;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    /// UUID v4, generated when the file is accepted.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Student registration number.
    pub nrp: Option<String>,
    pub email: Option<String>,
    pub name_student: String,
    pub class_name: Option<String>,
    pub folder_id: Option<i64>,
    pub folder: Option<String>,
    pub document_name: String,
    pub document_url: String,
    pub uploaded_date: DateTime<Utc>,
    /// Numeric grade kept as text, exactly as entered.
    pub grade: Option<String>,
    pub feedback: Option<String>,
    pub plagiarism: Option<Json>,
    pub page: Option<i32>,
    pub sentences: Option<i32>,
    /// Extracted text of the submission.
    pub content: Option<String>,
    pub clustering: Option<i32>,
    pub embedding: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::folder::Entity",
        from = "Column::FolderId",
        to = "super::folder::Column::Id"
    )]
    Folder,
}

impl Related<super::folder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Folder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Review state shown next to a submission. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Submitted,
    Reviewed,
    Graded,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentStatus::Submitted => "submitted",
            DocumentStatus::Reviewed => "reviewed",
            DocumentStatus::Graded => "graded",
        };
        write!(f, "{s}")
    }
}

/// Plagiarism findings attached by the processing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlagiarismReport {
    #[serde(default)]
    pub similarity: f64,
    #[serde(default)]
    pub matched_sources: Vec<String>,
    #[serde(default)]
    pub is_plagiarized: bool,
}

/// Fields known at upload time.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub id: String,
    pub nrp: Option<String>,
    pub email: Option<String>,
    pub name_student: String,
    pub class_name: Option<String>,
    pub folder_id: Option<i64>,
    pub folder: Option<String>,
    pub document_name: String,
    pub document_url: String,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl Model {
    pub async fn create(db: &DbConn, new: NewDocument) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(new.id),
            nrp: Set(new.nrp),
            email: Set(new.email),
            name_student: Set(new.name_student),
            class_name: Set(new.class_name),
            folder_id: Set(new.folder_id),
            folder: Set(new.folder),
            document_name: Set(new.document_name),
            document_url: Set(new.document_url),
            uploaded_date: Set(Utc::now()),
            grade: Set(None),
            feedback: Set(None),
            plagiarism: Set(None),
            page: Set(None),
            sentences: Set(None),
            content: Set(None),
            clustering: Set(None),
            embedding: Set(None),
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id(db: &DbConn, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    /// Documents filed under a folder, oldest upload first.
    pub async fn find_by_folder_id(db: &DbConn, folder_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::FolderId.eq(folder_id))
            .order_by_asc(Column::UploadedDate)
            .all(db)
            .await
    }

    /// Documents whose recorded folder name equals `name` exactly (case-sensitive,
    /// no trimming), oldest upload first. Still finds documents of deleted or
    /// renamed folders.
    pub async fn find_by_folder_name(db: &DbConn, name: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Folder.eq(name))
            .order_by_asc(Column::UploadedDate)
            .all(db)
            .await
    }

    /// Overwrites grade and feedback. Returns `None` when no document has `id`.
    pub async fn set_grade(
        db: &DbConn,
        id: &str,
        grade: &str,
        feedback: &str,
    ) -> Result<Option<Model>, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Grade, Expr::value(grade.to_owned()))
            .col_expr(Column::Feedback, Expr::value(feedback.to_owned()))
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }
        Self::find_by_id(db, id).await
    }

    /// `graded` needs both grade and feedback, `reviewed` only feedback.
    pub fn status(&self) -> DocumentStatus {
        match (present(&self.grade), present(&self.feedback)) {
            (true, true) => DocumentStatus::Graded,
            (_, true) => DocumentStatus::Reviewed,
            _ => DocumentStatus::Submitted,
        }
    }

    /// Parsed plagiarism report, if one is attached and well-formed.
    pub fn plagiarism_report(&self) -> Option<PlagiarismReport> {
        self.plagiarism
            .as_ref()
            .and_then(|json| serde_json::from_value(json.clone()).ok())
    }
}
