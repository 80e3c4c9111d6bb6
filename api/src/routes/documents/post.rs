use crate::response::{ApiResponse, JsonBodyRejection, error_response};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use db::models::document::Model as Document;
use serde::{Deserialize, Serialize};
use services::email::FeedbackEmail;
use services::error::ServiceError;

async fn load_document(state: &AppState, document_id: &str) -> Result<Document, ServiceError> {
    Document::find_by_id(state.db(), document_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Document not found".into()))
}

#[derive(Debug, Serialize)]
pub struct GeneratedFeedback {
    pub feedback: String,
}

/// POST /api/documents/{document_id}/feedback
///
/// Ask the AI service for feedback on a submission. The text is returned for the
/// teacher to edit and is not saved.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "feedback": "Struktur laporan sudah baik…" },
///   "message": "Feedback generated successfully"
/// }
/// ```
///
/// - `404 Not Found` → unknown document
/// - `502 Bad Gateway` → AI service failed (`"HTTP error! status: 500"`)
pub async fn generate_feedback(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Response {
    let document = match load_document(&state, &document_id).await {
        Ok(document) => document,
        Err(e) => return error_response(e),
    };

    match state.ai().generate_feedback(&document).await {
        Ok(feedback) => Json(ApiResponse::success(
            GeneratedFeedback { feedback },
            "Feedback generated successfully",
        ))
        .into_response(),
        Err(e) => {
            tracing::warn!(document = %document.id, error = %e, "AI feedback failed");
            error_response(e)
        }
    }
}

/// Overrides for the feedback email. Anything left out is taken from the document.
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackEmailRequest {
    pub feedback: Option<String>,
    pub grade: Option<String>,
    pub assignment_title: Option<String>,
}

/// POST /api/documents/{document_id}/email
///
/// Email the feedback for a submission to the student's address.
///
/// ### Request Body
/// ```json
/// { "feedback": "Bagus, lanjutkan.", "grade": "90" }
/// ```
/// Send `{}` to use the stored grade and feedback.
///
/// ### Responses
/// - `200 OK` → `"Email sent successfully"`
/// - `400 Bad Request` → document has no email address, or no feedback to send
/// - `404 Not Found` → unknown document
/// - `502 Bad Gateway` → delivery failed
pub async fn send_feedback_email(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<FeedbackEmailRequest>, JsonBodyRejection>,
) -> Response {
    let document = match load_document(&state, &document_id).await {
        Ok(document) => document,
        Err(e) => return error_response(e),
    };

    let Some(to) = document.email.as_deref().filter(|e| !e.trim().is_empty()) else {
        return error_response(ServiceError::Validation(
            "Document has no email address".into(),
        ));
    };

    let feedback = req.feedback.or_else(|| document.feedback.clone());
    let Some(feedback) = feedback.filter(|f| !f.trim().is_empty()) else {
        return error_response(ServiceError::Validation("Feedback is required".into()));
    };
    let grade = req.grade.or_else(|| document.grade.clone());
    let title = req
        .assignment_title
        .or_else(|| document.folder.clone())
        .unwrap_or_else(|| "Assignment".to_string());

    let email = FeedbackEmail {
        to,
        student_name: &document.name_student,
        assignment_title: &title,
        grade: grade.as_deref(),
        feedback: &feedback,
    };

    match state.email().send_feedback(email).await {
        Ok(()) => Json(ApiResponse::success((), "Email sent successfully")).into_response(),
        Err(e) => error_response(e),
    }
}
