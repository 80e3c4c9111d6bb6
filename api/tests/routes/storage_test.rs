#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn stored_objects_are_served_with_a_guessed_type() {
        let app = make_test_app().await;
        app.state
            .storage()
            .put_new("Aljabar Linear/Informatika A/tugas.pdf", b"%PDF-1.4")
            .await
            .unwrap();

        let response = app
            .router
            .clone()
            .oneshot(get("/api/storage/Aljabar%20Linear/Informatika%20A/tugas.pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"%PDF-1.4");
    }

    #[tokio::test]
    async fn missing_objects_are_not_found() {
        let app = make_test_app().await;
        let (status, json) = send(&app.router, get("/api/storage/tidak/ada.pdf")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn paths_outside_the_root_are_rejected() {
        let app = make_test_app().await;
        let (status, _) = send(&app.router, get("/api/storage/..%2F..%2Fetc%2Fpasswd")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
