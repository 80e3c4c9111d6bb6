use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::error::ServiceError;

pub use services::error::format_validation_errors;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// Error responses carry `success: false`, a default `data` and the error text in
/// `message`.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// HTTP status for a service failure.
pub fn status_for(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
        ServiceError::Database(_) | ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ServiceError::Http(_) | ServiceError::Upstream(_) | ServiceError::Email(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

/// Renders a service failure as an `ApiResponse` error body.
pub fn error_response(error: ServiceError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        tracing::error!(error = %error, "request failed");
    }
    (status, Json(ApiResponse::<()>::error(error.to_string()))).into_response()
}

/// Rejection for request bodies that are not valid JSON for the target type.
///
/// Used with `axum_extra::extract::WithRejection` so parse failures answer with a
/// `400` in the usual envelope instead of axum's plain-text `422`.
#[derive(Debug)]
pub struct JsonBodyRejection(JsonRejection);

impl From<JsonRejection> for JsonBodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        error_response(ServiceError::Validation(self.0.body_text()))
    }
}
