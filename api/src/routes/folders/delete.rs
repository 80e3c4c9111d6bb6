use crate::response::{ApiResponse, error_response};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

/// DELETE /api/folders/{folder_id}
///
/// Delete a folder. Its documents stay in place and remain reachable through
/// `GET /api/documents?folder={name}`. Deleting an unknown id also succeeds.
///
/// ### Response
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Folder deleted successfully"
/// }
/// ```
pub async fn delete_folder(State(state): State<AppState>, Path(folder_id): Path<i64>) -> Response {
    match state.folders().delete(folder_id).await {
        Ok(_) => Json(ApiResponse::success((), "Folder deleted successfully")).into_response(),
        Err(e) => error_response(e),
    }
}
