use crate::response::{ApiResponse, JsonBodyRejection, error_response, format_validation_errors};
use crate::state::AppState;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::WithRejection;
use db::models::class::Model as Class;
use serde::Deserialize;
use validator::Validate;

/// Builds the `/classes` route group.
pub fn classes_routes() -> Router<AppState> {
    Router::new().route("/", get(get_classes).post(create_class))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClassRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "class_name is required"))]
    pub class_name: String,
    #[validate(range(min = 0, message = "total_student must not be negative"))]
    pub total_student: i32,
}

/// GET /api/classes
///
/// All classes ordered by name.
pub async fn get_classes(State(state): State<AppState>) -> Response {
    match Class::list(state.db()).await {
        Ok(classes) => {
            Json(ApiResponse::success(classes, "Classes retrieved successfully")).into_response()
        }
        Err(e) => error_response(e.into()),
    }
}

/// POST /api/classes
///
/// ### Request Body
/// ```json
/// { "class_name": "Informatika A", "total_student": 30 }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` on validation failure
pub async fn create_class(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateClassRequest>, JsonBodyRejection>,
) -> Response {
    if let Err(errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(&errors))),
        )
            .into_response();
    }
    let class_name = req.class_name.trim();
    if class_name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("class_name is required")),
        )
            .into_response();
    }

    match Class::create(state.db(), class_name, req.total_student).await {
        Ok(class) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(class, "Class created successfully")),
        )
            .into_response(),
        Err(e) => error_response(e.into()),
    }
}
