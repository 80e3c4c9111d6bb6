use crate::response::{ApiResponse, JsonBodyRejection, error_response};
use crate::routes::common::DocumentResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use services::grading::GradeSubmission;

/// PUT /api/documents/{document_id}/grade
///
/// Save a grade and feedback, replacing whatever was there.
///
/// ### Request Body
/// ```json
/// { "grade": "85", "feedback": "Langkah eliminasi sudah benar." }
/// ```
///
/// `grade` may also be a JSON number. No range check is applied.
///
/// ### Responses
/// - `200 OK` → `"Grade submitted successfully"`
/// - `404 Not Found` → `"Document not found"`
pub async fn grade_document(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<GradeSubmission>, JsonBodyRejection>,
) -> Response {
    match state.grading().grade(&document_id, req).await {
        Ok(document) => Json(ApiResponse::success(
            DocumentResponse::from(document),
            "Grade submitted successfully",
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}
