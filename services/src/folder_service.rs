//! Folder CRUD, counts and deadline queries.
//!
//! Every mutation announces `/folders` (and the affected `/folders/{name}` pages)
//! through the [`Revalidator`]. Writes are last-writer-wins.

use chrono::{DateTime, Utc};
use db::models::document::Model as Document;
use db::models::folder::{ActiveModel, Entity, FolderWithCount, Model as Folder};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::Json;
use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel};
use serde::{Deserialize, Deserializer};
use util::deadline::DeadlineStatus;
use util::revalidate::{FOLDERS_PATH, Revalidator, folder_path};
use validator::Validate;

use crate::error::{ServiceError, ServiceResult};
use crate::service::ToActiveModel;

/// A plagiarism threshold as sent by a client: either a number or its text form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    Number(f64),
    Text(String),
}

impl Threshold {
    fn into_text(self) -> ServiceResult<String> {
        match self {
            Threshold::Number(v) if v.is_finite() => Ok(v.to_string()),
            Threshold::Number(v) => Err(ServiceError::Validation(format!(
                "Invalid plagiarism threshold: {v}"
            ))),
            Threshold::Text(s) => {
                let s = s.trim().to_string();
                match s.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(s),
                    _ => Err(ServiceError::Validation(format!(
                        "Invalid plagiarism threshold: {s}"
                    ))),
                }
            }
        }
    }
}

fn thresholds_json(values: Vec<Threshold>) -> ServiceResult<Json> {
    let texts = values
        .into_iter()
        .map(|t| t.into_text().map(Json::String))
        .collect::<ServiceResult<Vec<_>>>()?;
    Ok(Json::Array(texts))
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn patch<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn ensure_password(use_password: bool, password: Option<&str>) -> ServiceResult<()> {
    if use_password && password.is_none_or(|p| p.is_empty()) {
        return Err(ServiceError::Validation(
            "A password is required when use_password is enabled".into(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateFolder {
    #[serde(default)]
    pub name_assignment: String,
    #[validate(required(message = "due_date is required"))]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attachment_url: Option<String>,
    #[serde(default)]
    pub plagiarism_thresholds: Option<Vec<Threshold>>,
    #[serde(default)]
    pub use_password: bool,
    #[serde(default)]
    pub password: Option<String>,
}

impl ToActiveModel<Entity> for CreateFolder {
    fn into_active_model(self) -> Result<ActiveModel, ServiceError> {
        if self.name_assignment.trim().is_empty() {
            return Err(ServiceError::Validation(
                "name_assignment is required".into(),
            ));
        }
        let due_date = self
            .due_date
            .ok_or_else(|| ServiceError::Validation("due_date is required".into()))?;
        ensure_password(self.use_password, self.password.as_deref())?;

        let thresholds = self.plagiarism_thresholds.map(thresholds_json).transpose()?;

        Ok(ActiveModel {
            name_assignment: Set(self.name_assignment),
            due_date: Set(due_date),
            class_name: Set(self.class_name),
            description: Set(self.description),
            attachment_url: Set(self.attachment_url),
            plagiarism_thresholds: Set(thresholds),
            use_password: Set(self.use_password),
            password: Set(self.password),
            created_at: Set(Utc::now()),
            ..Default::default()
        })
    }
}

/// Partial update. Absent fields are left alone; `null` clears a nullable field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFolder {
    #[serde(default)]
    pub name_assignment: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "patch")]
    pub class_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch")]
    pub attachment_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch")]
    pub plagiarism_thresholds: Option<Option<Vec<Threshold>>>,
    #[serde(default)]
    pub use_password: Option<bool>,
    #[serde(default, deserialize_with = "patch")]
    pub password: Option<Option<String>>,
}

impl UpdateFolder {
    /// Applies the patch on top of `current`, checking the result is still valid.
    fn apply(self, current: Folder) -> ServiceResult<ActiveModel> {
        let use_password = self.use_password.unwrap_or(current.use_password);
        let password = match &self.password {
            Some(p) => p.clone(),
            None => current.password.clone(),
        };
        ensure_password(use_password, password.as_deref())?;

        let mut active = current.into_active_model();

        if let Some(name) = self.name_assignment {
            if name.trim().is_empty() {
                return Err(ServiceError::Validation(
                    "name_assignment cannot be empty".into(),
                ));
            }
            active.name_assignment = Set(name);
        }
        if let Some(due) = self.due_date {
            active.due_date = Set(due);
        }
        if let Some(v) = self.class_name {
            active.class_name = Set(v);
        }
        if let Some(v) = self.description {
            active.description = Set(v);
        }
        if let Some(v) = self.attachment_url {
            active.attachment_url = Set(v);
        }
        if let Some(v) = self.plagiarism_thresholds {
            active.plagiarism_thresholds = Set(v.map(thresholds_json).transpose()?);
        }
        if let Some(v) = self.use_password {
            active.use_password = Set(v);
        }
        if let Some(v) = self.password {
            active.password = Set(v);
        }
        Ok(active)
    }
}

#[derive(Clone)]
pub struct FolderService {
    db: DatabaseConnection,
    revalidator: Revalidator,
}

impl FolderService {
    pub fn new(db: DatabaseConnection, revalidator: Revalidator) -> Self {
        Self { db, revalidator }
    }

    pub async fn create(&self, params: CreateFolder) -> ServiceResult<Folder> {
        params.validate()?;
        let folder = params.into_active_model()?.insert(&self.db).await?;

        tracing::info!(id = folder.id, name = %folder.name_assignment, "folder created");
        self.revalidator.revalidate(FOLDERS_PATH);
        Ok(folder)
    }

    pub async fn update(&self, id: i64, params: UpdateFolder) -> ServiceResult<Folder> {
        let current = self.find(id).await?;
        let old_name = current.name_assignment.clone();

        let folder = params.apply(current)?.update(&self.db).await?;

        tracing::info!(id, name = %folder.name_assignment, "folder updated");
        self.revalidator.revalidate(FOLDERS_PATH);
        self.revalidator.revalidate(folder_path(&old_name));
        if folder.name_assignment != old_name {
            self.revalidator.revalidate(folder_path(&folder.name_assignment));
        }
        Ok(folder)
    }

    /// Deletes the folder if it exists. Documents filed under it are kept.
    ///
    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> ServiceResult<bool> {
        let existing = Folder::find_by_id(&self.db, id).await?;
        let deleted = Folder::delete(&self.db, id).await?;

        tracing::info!(id, deleted, "folder delete");
        self.revalidator.revalidate(FOLDERS_PATH);
        if let Some(folder) = existing {
            self.revalidator
                .revalidate(folder_path(&folder.name_assignment));
        }
        Ok(deleted)
    }

    pub async fn list(&self) -> ServiceResult<Vec<FolderWithCount>> {
        Ok(Folder::list_with_counts(&self.db).await?)
    }

    pub async fn get(&self, id: i64) -> ServiceResult<FolderWithCount> {
        Ok(self.find(id).await?.with_count(&self.db).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> ServiceResult<FolderWithCount> {
        let folder = Folder::find_by_name(&self.db, name)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Folder not found".into()))?;
        Ok(folder.with_count(&self.db).await?)
    }

    pub async fn deadline(&self, id: i64, now: DateTime<Utc>) -> ServiceResult<DeadlineStatus> {
        Ok(self.find(id).await?.deadline_status(now))
    }

    /// Submissions filed under the folder, oldest first.
    pub async fn documents(&self, id: i64) -> ServiceResult<Vec<Document>> {
        let folder = self.find(id).await?;
        Ok(Document::find_by_folder_id(&self.db, folder.id).await?)
    }

    async fn find(&self, id: i64) -> ServiceResult<Folder> {
        Folder::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Folder not found".into()))
    }
}
