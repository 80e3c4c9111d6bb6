use crate::response::{ApiResponse, error_response};
use crate::routes::common::{DocumentResponse, document_list};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::document::Model as Document;
use serde::Deserialize;
use services::error::ServiceError;

#[derive(Debug, Deserialize)]
pub struct DocumentsQuery {
    pub folder: Option<String>,
}

/// GET /api/documents?folder={name}
///
/// Submissions whose recorded folder name equals `folder` exactly. Works for
/// folders that have since been renamed or deleted.
///
/// ### Responses
/// - `200 OK` with a (possibly empty) list
/// - `400 Bad Request` when `folder` is missing
pub async fn get_documents(
    State(state): State<AppState>,
    Query(query): Query<DocumentsQuery>,
) -> Response {
    let Some(folder) = query.folder else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Query parameter 'folder' is required")),
        )
            .into_response();
    };

    match Document::find_by_folder_name(state.db(), &folder).await {
        Ok(documents) => Json(ApiResponse::success(
            document_list(documents),
            "Documents retrieved successfully",
        ))
        .into_response(),
        Err(e) => error_response(e.into()),
    }
}

/// GET /api/documents/{document_id}
pub async fn get_document(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Response {
    match Document::find_by_id(state.db(), &document_id).await {
        Ok(Some(document)) => Json(ApiResponse::success(
            DocumentResponse::from(document),
            "Document retrieved successfully",
        ))
        .into_response(),
        Ok(None) => error_response(ServiceError::NotFound("Document not found".into())),
        Err(e) => error_response(e.into()),
    }
}
