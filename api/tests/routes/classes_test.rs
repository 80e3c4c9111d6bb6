#[cfg(test)]
mod tests {
    use crate::helpers::{json_request, make_test_app, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;

    #[tokio::test]
    async fn create_and_list_classes() {
        let app = make_test_app().await;

        for (name, total) in [("Sistem Informasi A", 25), ("Informatika A", 30)] {
            let (status, json) = send(
                &app.router,
                json_request(
                    "POST",
                    "/api/classes",
                    json!({ "class_name": name, "total_student": total }),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(json["data"]["class_name"], name);
        }

        let req = Request::builder()
            .method("GET")
            .uri("/api/classes")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(&app.router, req).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["class_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Informatika A", "Sistem Informasi A"]);
    }

    #[tokio::test]
    async fn invalid_class_is_rejected() {
        let app = make_test_app().await;

        let (status, json) = send(
            &app.router,
            json_request("POST", "/api/classes", json!({ "class_name": "", "total_student": 10 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "class_name is required");

        let (status, json) = send(
            &app.router,
            json_request(
                "POST",
                "/api/classes",
                json!({ "class_name": "Teknik Komputer A", "total_student": -1 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "total_student must not be negative");

        let (status, json) = send(
            &app.router,
            json_request(
                "POST",
                "/api/classes",
                json!({ "class_name": "Teknik Komputer A", "total_student": "banyak" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }
}
