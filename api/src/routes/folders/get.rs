use crate::response::{ApiResponse, error_response};
use crate::routes::common::document_list;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;

/// GET /api/folders
///
/// Lists every folder in creation order with the number of documents filed under it.
/// Passwords are never included.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "name_assignment": "Aljabar Linear",
///       "due_date": "2025-06-15T23:59:59Z",
///       "class_name": "Informatika A",
///       "description": null,
///       "attachment_url": null,
///       "plagiarism_thresholds": ["0.8"],
///       "use_password": false,
///       "created_at": "2025-06-01T08:00:00Z",
///       "document_count": 3
///     }
///   ],
///   "message": "Folders retrieved successfully"
/// }
/// ```
pub async fn get_folders(State(state): State<AppState>) -> Response {
    match state.folders().list().await {
        Ok(folders) => {
            Json(ApiResponse::success(folders, "Folders retrieved successfully")).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/folders/{folder_id}
///
/// One folder with its document count. `404` when the id is unknown.
pub async fn get_folder(State(state): State<AppState>, Path(folder_id): Path<i64>) -> Response {
    match state.folders().get(folder_id).await {
        Ok(folder) => {
            Json(ApiResponse::success(folder, "Folder retrieved successfully")).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/folders/by-name/{*name}
///
/// Folder whose name matches exactly (case-sensitive, no trimming). The rest of
/// the path is the name, so names containing `/` can be looked up too.
pub async fn get_folder_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    match state.folders().get_by_name(&name).await {
        Ok(folder) => {
            Json(ApiResponse::success(folder, "Folder retrieved successfully")).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/folders/{folder_id}/deadline
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "is_expired": false,
///     "time_remaining": "5 hari 0 jam",
///     "due_date": "2025-06-15T23:59:59Z"
///   },
///   "message": "Deadline status retrieved successfully"
/// }
/// ```
///
/// `time_remaining` is omitted once the deadline has passed.
pub async fn get_deadline(State(state): State<AppState>, Path(folder_id): Path<i64>) -> Response {
    match state.folders().deadline(folder_id, Utc::now()).await {
        Ok(status) => Json(ApiResponse::success(
            status,
            "Deadline status retrieved successfully",
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/folders/{folder_id}/documents
///
/// Submissions filed under the folder, oldest first, each with its review status
/// (`submitted`, `reviewed` or `graded`).
pub async fn get_folder_documents(
    State(state): State<AppState>,
    Path(folder_id): Path<i64>,
) -> Response {
    match state.folders().documents(folder_id).await {
        Ok(documents) => Json(ApiResponse::success(
            document_list(documents),
            "Documents retrieved successfully",
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}
