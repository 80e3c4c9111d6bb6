use crate::response::{ApiResponse, JsonBodyRejection, error_response};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use services::folder_service::UpdateFolder;

/// PUT /api/folders/{folder_id}
///
/// Partially update a folder. Fields left out of the body keep their value;
/// an explicit `null` clears a nullable field.
///
/// ### Request Body
/// ```json
/// {
///   "due_date": "2025-07-01T23:59:59Z",
///   "description": null
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated folder
/// - `400 Bad Request` when the result would be invalid (blank name, password flag without password)
/// - `404 Not Found`
pub async fn edit_folder(
    State(state): State<AppState>,
    Path(folder_id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateFolder>, JsonBodyRejection>,
) -> Response {
    match state.folders().update(folder_id, req).await {
        Ok(folder) => {
            Json(ApiResponse::success(folder, "Folder updated successfully")).into_response()
        }
        Err(e) => error_response(e),
    }
}
