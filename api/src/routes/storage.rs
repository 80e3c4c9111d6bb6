use crate::response::error_response;
use crate::state::AppState;
use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};

/// Builds the `/storage` route group.
pub fn storage_routes() -> Router<AppState> {
    Router::new().route("/{*path}", get(get_object))
}

/// GET /api/storage/{*path}
///
/// Serves a stored submission file with a MIME type guessed from its extension.
/// Paths that would leave the storage root are rejected with `400`.
pub async fn get_object(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    match state.storage().read(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}
