//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness and database check
//! - `/folders` → assignment folders, their deadlines, documents and uploads
//! - `/documents` → submissions, grading, AI feedback and feedback emails
//! - `/classes` → class list
//! - `/storage` → stored submission files

use crate::routes::{
    classes::classes_routes, documents::documents_routes, folders::folders_routes,
    health::health_routes, storage::storage_routes,
};
use crate::state::AppState;
use axum::Router;

pub mod classes;
pub mod common;
pub mod documents;
pub mod folders;
pub mod health;
pub mod storage;

/// Builds the router for every HTTP endpoint, ready to be nested under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/folders", folders_routes(&app_state))
        .nest("/documents", documents_routes())
        .nest("/classes", classes_routes())
        .nest("/storage", storage_routes())
        .with_state(app_state)
}
