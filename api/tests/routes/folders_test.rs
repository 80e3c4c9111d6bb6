#[cfg(test)]
mod tests {
    use crate::helpers::{json_request, make_test_app, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use db::models::document::{Model as DocumentModel, NewDocument};
    use db::models::folder::Model as FolderModel;
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};

    fn get(uri: &str) -> Request<Body> {
        Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
    }

    async fn add_document(db: &DatabaseConnection, folder: &FolderModel, student: &str) {
        DocumentModel::create(
            db,
            NewDocument {
                id: format!("doc-{student}"),
                nrp: None,
                email: Some(format!("{student}@example.com")),
                name_student: student.to_string(),
                class_name: folder.class_name.clone(),
                folder_id: Some(folder.id),
                folder: Some(folder.name_assignment.clone()),
                document_name: format!("{student}.pdf"),
                document_url: format!("http://localhost:3000/api/storage/{student}.pdf"),
            },
        )
        .await
        .unwrap();
    }

    fn count_for(list: &Value, id: i64) -> u64 {
        list.as_array()
            .unwrap()
            .iter()
            .find(|f| f["id"] == id)
            .map(|f| f["document_count"].as_u64().unwrap())
            .unwrap()
    }

    #[tokio::test]
    async fn create_folder_returns_created_folder_without_password() {
        let app = make_test_app().await;
        let body = json!({
            "name_assignment": "Praktikum DNS Server",
            "due_date": "2030-01-01T00:00:00Z",
            "class_name": "Informatika A",
            "plagiarism_thresholds": [0.8, 1],
            "use_password": true,
            "password": "dns2025"
        });

        let (status, json) = send(&app.router, json_request("POST", "/api/folders", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Folder created successfully");
        assert_eq!(json["data"]["name_assignment"], "Praktikum DNS Server");
        assert_eq!(json["data"]["plagiarism_thresholds"], json!(["0.8", "1"]));
        assert_eq!(json["data"]["use_password"], true);
        assert!(json["data"].get("password").is_none());
    }

    #[tokio::test]
    async fn create_folder_validation_errors() {
        let app = make_test_app().await;

        let (status, json) = send(
            &app.router,
            json_request("POST", "/api/folders", json!({ "name_assignment": "Tanpa Tenggat" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "due_date is required");

        let (status, _) = send(
            &app.router,
            json_request(
                "POST",
                "/api/folders",
                json!({
                    "name_assignment": "Terkunci",
                    "due_date": "2030-01-01T00:00:00Z",
                    "use_password": true
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_bodies_are_rejected_in_the_response_envelope() {
        let app = make_test_app().await;

        let (status, json) = send(
            &app.router,
            json_request(
                "POST",
                "/api/folders",
                json!({ "name_assignment": "Aljabar Linear", "due_date": "2025-06-15" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("due_date"));

        let folder = FolderModel::create(app.state.db(), "Aljabar Linear", Utc::now() + Duration::days(1), None)
            .await
            .unwrap();
        let (status, json) = send(
            &app.router,
            json_request(
                "PUT",
                &format!("/api/folders/{}", folder.id),
                json!({ "use_password": "ya" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn list_reports_document_counts() {
        let app = make_test_app().await;
        let db = app.state.db();
        let due = Utc::now() + Duration::days(5);
        let aljabar = FolderModel::create(db, "Aljabar Linear", due, Some("Informatika A")).await.unwrap();
        let puisi = FolderModel::create(db, "Analisis Puisi", due, None).await.unwrap();
        add_document(db, &aljabar, "budi").await;
        add_document(db, &aljabar, "siti").await;

        let (status, json) = send(&app.router, get("/api/folders")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(count_for(&json["data"], aljabar.id), 2);
        assert_eq!(count_for(&json["data"], puisi.id), 0);

        let (status, json) = send(&app.router, get("/api/folders/by-name/Aljabar%20Linear")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], aljabar.id);
        assert_eq!(json["data"]["document_count"], 2);

        let (status, _) = send(&app.router, get("/api/folders/by-name/aljabar%20linear")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn folder_names_with_slashes_are_found_by_name() {
        let app = make_test_app().await;
        let folder = FolderModel::create(
            app.state.db(),
            "Tugas 1/Revisi",
            Utc::now() + Duration::days(2),
            None,
        )
        .await
        .unwrap();

        let (status, json) = send(&app.router, get("/api/folders/by-name/Tugas%201/Revisi")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], folder.id);
        assert_eq!(json["data"]["name_assignment"], "Tugas 1/Revisi");
    }

    #[tokio::test]
    async fn get_unknown_folder_is_not_found() {
        let app = make_test_app().await;
        let (status, json) = send(&app.router, get("/api/folders/404")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Folder not found");
    }

    #[tokio::test]
    async fn partial_update_keeps_absent_fields() {
        let app = make_test_app().await;
        let (_, created) = send(
            &app.router,
            json_request(
                "POST",
                "/api/folders",
                json!({
                    "name_assignment": "Eksperimen Gerak",
                    "due_date": "2030-03-01T12:00:00Z",
                    "class_name": "Fisika X",
                    "description": "Gerak lurus beraturan"
                }),
            ),
        )
        .await;
        let id = created["data"]["id"].as_i64().unwrap();

        let (status, json) = send(
            &app.router,
            json_request(
                "PUT",
                &format!("/api/folders/{id}"),
                json!({ "description": null, "due_date": "2030-04-01T12:00:00Z" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Folder updated successfully");
        assert_eq!(json["data"]["name_assignment"], "Eksperimen Gerak");
        assert_eq!(json["data"]["class_name"], "Fisika X");
        assert_eq!(json["data"]["description"], Value::Null);
        assert_eq!(json["data"]["due_date"], "2030-04-01T12:00:00Z");
    }

    #[tokio::test]
    async fn delete_keeps_documents_queryable_by_old_name() {
        let app = make_test_app().await;
        let db = app.state.db();
        let folder = FolderModel::create(db, "Praktikum DNS Server", Utc::now() + Duration::days(1), None)
            .await
            .unwrap();
        add_document(db, &folder, "rina").await;

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/api/folders/{}", folder.id))
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(&app.router, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Folder deleted successfully");

        let (status, _) = send(&app.router, get(&format!("/api/folders/{}", folder.id))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, json) = send(
            &app.router,
            get("/api/documents?folder=Praktikum%20DNS%20Server"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["name_student"], "rina");
    }

    #[tokio::test]
    async fn deadline_endpoint_reports_status() {
        let app = make_test_app().await;
        let db = app.state.db();
        let open = FolderModel::create(db, "Aljabar Linear", Utc::now() + Duration::days(3), None)
            .await
            .unwrap();
        let closed = FolderModel::create(db, "Analisis Puisi", Utc::now() - Duration::hours(1), None)
            .await
            .unwrap();

        let (status, json) = send(&app.router, get(&format!("/api/folders/{}/deadline", open.id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["is_expired"], false);
        assert!(json["data"]["time_remaining"].as_str().unwrap().contains("hari"));

        let (_, json) = send(&app.router, get(&format!("/api/folders/{}/deadline", closed.id))).await;
        assert_eq!(json["data"]["is_expired"], true);
        assert!(json["data"].get("time_remaining").is_none());
    }

    #[tokio::test]
    async fn folder_documents_include_status() {
        let app = make_test_app().await;
        let db = app.state.db();
        let folder = FolderModel::create(db, "Aljabar Linear", Utc::now() + Duration::days(3), None)
            .await
            .unwrap();
        add_document(db, &folder, "budi").await;

        let (status, json) = send(&app.router, get(&format!("/api/folders/{}/documents", folder.id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["status"], "submitted");
        assert_eq!(json["data"][0]["folder_id"], folder.id);
    }
}
