#[cfg(test)]
mod tests {
    use crate::helpers::{TestApp, json_request, make_test_app, make_test_app_with_ai, send, spawn_mock_ai};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use db::models::document::{ActiveModel as DocumentActive, Model as DocumentModel, NewDocument};
    use db::models::folder::Model as FolderModel;
    use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
    use serde_json::{Value, json};

    async fn seed_document(db: &DatabaseConnection, email: Option<&str>) -> DocumentModel {
        let folder = FolderModel::create(db, "Aljabar Linear", Utc::now() + Duration::days(2), None)
            .await
            .unwrap();
        DocumentModel::create(
            db,
            NewDocument {
                id: "5a1f0c9e-2b7d-4c1a-9f3e-1d2c3b4a5f60".into(),
                nrp: Some("3323600034".into()),
                email: email.map(str::to_owned),
                name_student: "Dewi Lestari".into(),
                class_name: Some("Informatika A".into()),
                folder_id: Some(folder.id),
                folder: Some(folder.name_assignment.clone()),
                document_name: "eliminasi-gauss.pdf".into(),
                document_url: "http://localhost:3000/api/storage/eliminasi-gauss.pdf".into(),
            },
        )
        .await
        .unwrap()
    }

    async fn get_document_json(app: &TestApp, id: &str) -> Value {
        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/documents/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(&app.router, req).await;
        assert_eq!(status, StatusCode::OK);
        json
    }

    #[tokio::test]
    async fn document_carries_parsed_plagiarism_report() {
        let app = make_test_app().await;
        let doc = seed_document(app.state.db(), None).await;

        let json = get_document_json(&app, &doc.id).await;
        assert!(json["data"].get("plagiarism_report").is_none());

        let mut active: DocumentActive = doc.clone().into();
        active.plagiarism = Set(Some(json!({
            "similarity": 0.35,
            "matched_sources": ["tutorial1.pdf", "documentation.com"],
            "is_plagiarized": false
        })));
        active.update(app.state.db()).await.unwrap();

        let json = get_document_json(&app, &doc.id).await;
        let report = &json["data"]["plagiarism_report"];
        assert_eq!(report["similarity"], 0.35);
        assert_eq!(report["matched_sources"], json!(["tutorial1.pdf", "documentation.com"]));
        assert_eq!(report["is_plagiarized"], false);
    }

    #[tokio::test]
    async fn malformed_plagiarism_json_is_left_out_of_the_report() {
        let app = make_test_app().await;
        let doc = seed_document(app.state.db(), None).await;

        let mut active: DocumentActive = doc.clone().into();
        active.plagiarism = Set(Some(json!({ "similarity": "tinggi" })));
        active.update(app.state.db()).await.unwrap();

        let json = get_document_json(&app, &doc.id).await;
        assert_eq!(json["data"]["plagiarism"], json!({ "similarity": "tinggi" }));
        assert!(json["data"].get("plagiarism_report").is_none());
    }

    #[tokio::test]
    async fn grade_overwrites_and_reports_graded_status() {
        let app = make_test_app().await;
        let doc = seed_document(app.state.db(), Some("dewi@example.com")).await;

        let (status, json) = send(
            &app.router,
            json_request(
                "PUT",
                &format!("/api/documents/{}/grade", doc.id),
                json!({ "grade": "85", "feedback": "Langkah eliminasi sudah benar." }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Grade submitted successfully");
        assert_eq!(json["data"]["grade"], "85");
        assert_eq!(json["data"]["status"], "graded");

        // Out-of-range grades are stored as given.
        let (status, json) = send(
            &app.router,
            json_request(
                "PUT",
                &format!("/api/documents/{}/grade", doc.id),
                json!({ "grade": 120, "feedback": "Bonus" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["grade"], "120");
    }

    #[tokio::test]
    async fn grade_unknown_document_is_not_found() {
        let app = make_test_app().await;
        let (status, json) = send(
            &app.router,
            json_request(
                "PUT",
                "/api/documents/does-not-exist/grade",
                json!({ "grade": "90", "feedback": "ok" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Document not found");
    }

    #[tokio::test]
    async fn grade_without_grade_field_is_a_json_error() {
        let app = make_test_app().await;
        let doc = seed_document(app.state.db(), None).await;

        let (status, json) = send(
            &app.router,
            json_request(
                "PUT",
                &format!("/api/documents/{}/grade", doc.id),
                json!({ "feedback": "ok" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("grade"));
    }

    #[tokio::test]
    async fn ai_feedback_prefers_combined_output() {
        let ai = spawn_mock_ai(
            StatusCode::OK,
            json!({ "message": "fallback", "combined_output": "Penjelasan sudah runtut." }),
        )
        .await;
        let app = make_test_app_with_ai(&ai).await;
        let doc = seed_document(app.state.db(), None).await;

        let (status, json) = send(
            &app.router,
            json_request("POST", &format!("/api/documents/{}/feedback", doc.id), json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["feedback"], "Penjelasan sudah runtut.");

        // Generated feedback is not persisted.
        let stored = DocumentModel::find_by_id(app.state.db(), &doc.id).await.unwrap().unwrap();
        assert!(stored.feedback.is_none());
    }

    #[tokio::test]
    async fn ai_feedback_without_known_fields_uses_placeholder() {
        let ai = spawn_mock_ai(StatusCode::OK, json!({ "unexpected": true })).await;
        let app = make_test_app_with_ai(&ai).await;
        let doc = seed_document(app.state.db(), None).await;

        let (_, json) = send(
            &app.router,
            json_request("POST", &format!("/api/documents/{}/feedback", doc.id), json!({})),
        )
        .await;
        assert_eq!(json["data"]["feedback"], "No feedback received");
    }

    #[tokio::test]
    async fn ai_feedback_http_error_is_reported() {
        let ai = spawn_mock_ai(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;
        let app = make_test_app_with_ai(&ai).await;
        let doc = seed_document(app.state.db(), None).await;

        let (status, json) = send(
            &app.router,
            json_request("POST", &format!("/api/documents/{}/feedback", doc.id), json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn feedback_email_is_sent_to_the_student() {
        let app = make_test_app().await;
        let doc = seed_document(app.state.db(), Some("dewi@example.com")).await;

        let (status, json) = send(
            &app.router,
            json_request(
                "POST",
                &format!("/api/documents/{}/email", doc.id),
                json!({ "feedback": "Rapi dan lengkap.", "grade": "92" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Email sent successfully");

        let messages = app.mail.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0.to()[0].to_string(), "dewi@example.com");
        assert!(messages[0].1.contains("Subject: Feedback Tugas: Aljabar Linear"));
    }

    #[tokio::test]
    async fn feedback_email_requires_an_address() {
        let app = make_test_app().await;
        let doc = seed_document(app.state.db(), None).await;

        let (status, json) = send(
            &app.router,
            json_request(
                "POST",
                &format!("/api/documents/{}/email", doc.id),
                json!({ "feedback": "Rapi." }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Document has no email address");
        assert!(app.mail.messages().await.is_empty());
    }
}
