//! # Folders Routes Module
//!
//! Defines and wires up routes for the `/api/folders` endpoint group.
//!
//! ## Structure
//! - `get.rs`: listings, single folder, deadline status, folder documents
//! - `post.rs`: create folder, upload submissions
//! - `put.rs`: partial folder update
//! - `delete.rs`: folder deletion

use crate::state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::get};
use delete::delete_folder;
use get::{get_deadline, get_folder, get_folder_by_name, get_folder_documents, get_folders};
use post::{create_folder, upload_documents};
use put::edit_folder;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Upper bound on files per upload request, used to size the body limit.
const MAX_FILES_PER_UPLOAD: u64 = 10;

/// Builds the `/folders` route group.
///
/// Routes:
/// - `GET    /folders`                        → all folders with document counts
/// - `POST   /folders`                        → create a folder
/// - `GET    /folders/by-name/{*name}`        → folder by exact name
/// - `GET    /folders/{folder_id}`            → folder by id
/// - `PUT    /folders/{folder_id}`            → partial update
/// - `DELETE /folders/{folder_id}`            → delete (documents are kept)
/// - `GET    /folders/{folder_id}/deadline`   → deadline status
/// - `GET    /folders/{folder_id}/documents`  → submissions of the folder
/// - `POST   /folders/{folder_id}/documents`  → multipart upload
pub fn folders_routes(app_state: &AppState) -> Router<AppState> {
    let body_limit = app_state
        .max_upload_bytes()
        .saturating_mul(MAX_FILES_PER_UPLOAD)
        .saturating_add(1024 * 1024);

    Router::new()
        .route("/", get(get_folders).post(create_folder))
        .route("/by-name/{*name}", get(get_folder_by_name))
        .route(
            "/{folder_id}",
            get(get_folder).put(edit_folder).delete(delete_folder),
        )
        .route("/{folder_id}/deadline", get(get_deadline))
        .route(
            "/{folder_id}/documents",
            get(get_folder_documents)
                .post(upload_documents)
                .layer(DefaultBodyLimit::max(
                    usize::try_from(body_limit).unwrap_or(usize::MAX),
                )),
        )
}
