//! Student uploads.
//!
//! An upload carries the student's details plus one or more PDF files for one
//! folder. Request-level problems (unknown folder, missing fields, deadline,
//! password) reject everything; file-level problems are reported per file and
//! the remaining files are still processed.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use db::models::document::{Model as Document, NewDocument};
use db::models::folder::Model as Folder;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use util::paths::{base_name, submission_key};
use util::revalidate::{FOLDERS_PATH, Revalidator, folder_path};
use uuid::Uuid;

use crate::ai_service::AiServiceClient;
use crate::error::{ServiceError, ServiceResult};
use crate::storage::SubmissionStorage;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    fn is_pdf(&self) -> bool {
        let by_type = self
            .content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .is_some_and(|ct| ct.trim().eq_ignore_ascii_case("application/pdf"));
        by_type || self.file_name.to_ascii_lowercase().ends_with(".pdf")
    }
}

/// Form data of one upload request.
#[derive(Debug, Clone, Default)]
pub struct UploadSubmission {
    pub name_student: Option<String>,
    pub email: Option<String>,
    pub class_name: Option<String>,
    pub nrp: Option<String>,
    pub password: Option<String>,
    pub files: Vec<UploadedFile>,
}

fn filled(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileResult {
    pub success: bool,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    fn failed(file_name: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            file_name: file_name.to_string(),
            uuid: None,
            url: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadOutcome {
    pub results: Vec<FileResult>,
}

impl UploadOutcome {
    pub fn accepted(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }
}

struct Student {
    name: String,
    email: String,
    class_name: String,
    nrp: Option<String>,
}

#[derive(Clone)]
pub struct SubmissionService {
    db: DatabaseConnection,
    storage: SubmissionStorage,
    ai: AiServiceClient,
    revalidator: Revalidator,
    max_upload_bytes: u64,
}

impl SubmissionService {
    pub fn new(
        db: DatabaseConnection,
        storage: SubmissionStorage,
        ai: AiServiceClient,
        revalidator: Revalidator,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            db,
            storage,
            ai,
            revalidator,
            max_upload_bytes,
        }
    }

    /// Stores every file of `submission` under the folder `folder_id`.
    pub async fn upload(
        &self,
        folder_id: i64,
        submission: UploadSubmission,
        now: DateTime<Utc>,
    ) -> ServiceResult<UploadOutcome> {
        let folder = Folder::find_by_id(&self.db, folder_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Folder not found".into()))?;

        let student = match (
            filled(&submission.name_student),
            filled(&submission.email),
            filled(&submission.class_name),
        ) {
            (Some(name), Some(email), Some(class_name)) if !submission.files.is_empty() => Student {
                name,
                email,
                class_name,
                nrp: filled(&submission.nrp),
            },
            _ => return Err(ServiceError::Validation("Incomplete form data".into())),
        };

        if !folder.is_active(now) {
            return Err(ServiceError::Forbidden(
                "The deadline for this assignment has passed".into(),
            ));
        }

        if folder.requires_password() && submission.password.as_deref() != folder.password.as_deref() {
            return Err(ServiceError::Forbidden("Invalid password".into()));
        }

        let mut results = Vec::with_capacity(submission.files.len());
        for file in &submission.files {
            let result = match self.store_file(&folder, &student, file).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(file = %file.file_name, error = %e, "upload rejected");
                    FileResult::failed(&file.file_name, e.to_string())
                }
            };
            results.push(result);
        }

        self.revalidator.revalidate(FOLDERS_PATH);
        self.revalidator
            .revalidate(folder_path(&folder.name_assignment));

        Ok(UploadOutcome { results })
    }

    async fn store_file(
        &self,
        folder: &Folder,
        student: &Student,
        file: &UploadedFile,
    ) -> ServiceResult<FileResult> {
        if !file.is_pdf() {
            return Err(ServiceError::Validation(format!(
                "{} is not a PDF file",
                file.file_name
            )));
        }
        if file.bytes.len() as u64 > self.max_upload_bytes {
            return Err(ServiceError::Validation(format!(
                "{} exceeds the maximum size of {} bytes",
                file.file_name, self.max_upload_bytes
            )));
        }

        let key = submission_key(&folder.name_assignment, &student.class_name, &file.file_name);
        self.storage.put_new(&key, &file.bytes).await?;
        let url = self.storage.public_url(&key);
        let uuid = Uuid::new_v4().to_string();

        let new = NewDocument {
            id: uuid.clone(),
            nrp: student.nrp.clone(),
            email: Some(student.email.clone()),
            name_student: student.name.clone(),
            class_name: Some(student.class_name.clone()),
            folder_id: Some(folder.id),
            folder: Some(folder.name_assignment.clone()),
            document_name: base_name(&file.file_name).to_string(),
            document_url: url.clone(),
        };
        if let Err(e) = Document::create(&self.db, new).await {
            if let Err(cleanup) = self.storage.remove(&key).await {
                tracing::error!(key = %key, error = %cleanup, "failed to remove orphaned upload");
            }
            return Err(e.into());
        }

        tracing::info!(uuid = %uuid, folder = folder.id, key = %key, "submission stored");

        if let Err(e) = self.ai.notify_upload(&uuid, &url).await {
            tracing::warn!(uuid = %uuid, error = %e, "processing service notification failed");
        }

        Ok(FileResult {
            success: true,
            file_name: file.file_name.clone(),
            uuid: Some(uuid),
            url: Some(url),
            error: None,
        })
    }
}
