use crate::response::{ApiResponse, JsonBodyRejection, error_response};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use services::error::ServiceError;
use services::folder_service::CreateFolder;
use services::submission::{UploadSubmission, UploadedFile};

/// POST /api/folders
///
/// Create an assignment folder.
///
/// ### Request Body
/// ```json
/// {
///   "name_assignment": "Aljabar Linear",
///   "due_date": "2025-06-15T23:59:59Z",
///   "class_name": "Informatika A",
///   "description": "Sistem persamaan linear",
///   "attachment_url": null,
///   "plagiarism_thresholds": [0.8, 0.9],
///   "use_password": true,
///   "password": "algebra123"
/// }
/// ```
///
/// ### Validation Rules
/// * `name_assignment`: required, not blank
/// * `due_date`: required, RFC 3339
/// * `plagiarism_thresholds`: numbers or numeric strings, stored as text
/// * `password`: required and non-empty when `use_password` is `true`
///
/// ### Responses
/// - `201 Created` with the folder in `data`
/// - `400 Bad Request` on validation failure
pub async fn create_folder(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateFolder>, JsonBodyRejection>,
) -> Response {
    match state.folders().create(req).await {
        Ok(folder) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(folder, "Folder created successfully")),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

async fn read_upload(mut multipart: Multipart) -> Result<UploadSubmission, ServiceError> {
    let mut form = UploadSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::Validation(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" | "files" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ServiceError::Validation(e.body_text()))?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.files.push(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            other => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ServiceError::Validation(e.body_text()))?;
                match other {
                    "name_student" | "nameStudent" => form.name_student = Some(value),
                    "email" => form.email = Some(value),
                    "class_name" | "class" => form.class_name = Some(value),
                    "nrp" => form.nrp = Some(value),
                    "password" => form.password = Some(value),
                    _ => tracing::debug!(field = other, "ignoring unknown upload field"),
                }
            }
        }
    }

    Ok(form)
}

/// POST /api/folders/{folder_id}/documents
///
/// Upload one or more PDF submissions (`multipart/form-data`).
///
/// ### Form Fields
/// * `name_student`, `email`, `class_name`: required
/// * `nrp`: optional student number
/// * `password`: required when the folder is password protected
/// * `file`: one part per PDF (repeatable)
///
/// ### Responses
///
/// - `200 OK` (files are reported individually)
/// ```json
/// {
///   "success": true,
///   "data": {
///     "results": [
///       { "success": true, "file_name": "tugas.pdf", "uuid": "…", "url": "http://…/api/storage/…" },
///       { "success": false, "file_name": "notes.txt", "error": "notes.txt is not a PDF file" }
///     ]
///   },
///   "message": "Processed 2 files"
/// }
/// ```
///
/// - `400 Bad Request` → `"Incomplete form data"`
/// - `403 Forbidden` → deadline passed or wrong password
/// - `404 Not Found` → unknown folder
pub async fn upload_documents(
    State(state): State<AppState>,
    Path(folder_id): Path<i64>,
    multipart: Multipart,
) -> Response {
    let form = match read_upload(multipart).await {
        Ok(form) => form,
        Err(e) => return error_response(e),
    };

    match state.submissions().upload(folder_id, form, Utc::now()).await {
        Ok(outcome) => {
            let message = format!("Processed {} files", outcome.results.len());
            Json(ApiResponse::success(outcome, message)).into_response()
        }
        Err(e) => error_response(e),
    }
}
