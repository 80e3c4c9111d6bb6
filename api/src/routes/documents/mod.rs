//! # Documents Routes Module
//!
//! Routes for the `/api/documents` endpoint group: submission lookup, grading,
//! AI feedback and feedback emails.

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use get::{get_document, get_documents};
use post::{generate_feedback, send_feedback_email};
use put::grade_document;

pub mod get;
pub mod post;
pub mod put;

/// Builds the `/documents` route group.
///
/// Routes:
/// - `GET  /documents?folder={name}`      → submissions recorded under a folder name
/// - `GET  /documents/{document_id}`      → one submission
/// - `PUT  /documents/{document_id}/grade` → save grade and feedback
/// - `POST /documents/{document_id}/feedback` → generate AI feedback (not saved)
/// - `POST /documents/{document_id}/email` → email feedback to the student
pub fn documents_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_documents))
        .route("/{document_id}", get(get_document))
        .route("/{document_id}/grade", put(grade_document))
        .route("/{document_id}/feedback", post(generate_feedback))
        .route("/{document_id}/email", post(send_feedback_email))
}
