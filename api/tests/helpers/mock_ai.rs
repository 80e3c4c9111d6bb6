use axum::{
    Json, Router,
    http::StatusCode,
    routing::post,
};
use serde_json::Value;
use tokio::net::TcpListener;

/// Spawns a stand-in AI service on a random local port and returns its base URL.
///
/// `POST /feedback/` answers with `status` and `body`; `POST /assignment/upload`
/// always succeeds.
pub async fn spawn_mock_ai(status: StatusCode, body: Value) -> String {
    let router = Router::new()
        .route(
            "/feedback/",
            post(move || {
                let body = body.clone();
                async move { (status, Json(body)) }
            }),
        )
        .route(
            "/assignment/upload",
            post(|| async { Json(serde_json::json!({ "status": "queued" })) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}
