#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, multipart_request, send};
    use axum::http::StatusCode;
    use chrono::{Duration, Utc};
    use db::models::document::Model as DocumentModel;
    use db::models::folder::{ActiveModel as FolderActive, Model as FolderModel};
    use sea_orm::{ActiveModelTrait, ActiveValue::Set};

    const PDF: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n<<>>\n%%EOF";

    fn student_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name_student", "Ahmad Fauzi"),
            ("email", "ahmad@example.com"),
            ("class_name", "Informatika A"),
            ("nrp", "3323600001"),
        ]
    }

    #[tokio::test]
    async fn upload_accepts_pdf_and_rejects_other_files() {
        let app = make_test_app().await;
        let folder = FolderModel::create(app.state.db(), "Aljabar Linear", Utc::now() + Duration::days(3), None)
            .await
            .unwrap();

        let req = multipart_request(
            &format!("/api/folders/{}/documents", folder.id),
            &student_fields(),
            &[
                ("tugas1.pdf", "application/pdf", PDF),
                ("catatan.txt", "text/plain", &b"bukan pdf"[..]),
            ],
        );
        let (status, json) = send(&app.router, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Processed 2 files");

        let results = json["data"]["results"].as_array().unwrap();
        assert_eq!(results[0]["success"], true);
        assert_eq!(results[0]["file_name"], "tugas1.pdf");
        assert_eq!(
            results[0]["url"],
            "http://localhost:3000/api/storage/Aljabar%20Linear/Informatika%20A/tugas1.pdf"
        );
        assert_eq!(results[1]["success"], false);
        assert!(results[1]["error"].as_str().unwrap().contains("not a PDF"));

        let stored = app
            .storage_dir
            .path()
            .join("Aljabar Linear/Informatika A/tugas1.pdf");
        assert_eq!(std::fs::read(stored).unwrap(), PDF);

        let docs = DocumentModel::find_by_folder_id(app.state.db(), folder.id).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name_student, "Ahmad Fauzi");
        assert_eq!(docs[0].nrp.as_deref(), Some("3323600001"));
        assert_eq!(docs[0].status().to_string(), "submitted");
    }

    #[tokio::test]
    async fn upload_with_missing_fields_is_incomplete() {
        let app = make_test_app().await;
        let folder = FolderModel::create(app.state.db(), "Aljabar Linear", Utc::now() + Duration::days(3), None)
            .await
            .unwrap();

        let req = multipart_request(
            &format!("/api/folders/{}/documents", folder.id),
            &[("name_student", "Ahmad Fauzi"), ("class_name", "Informatika A")],
            &[("tugas1.pdf", "application/pdf", PDF)],
        );
        let (status, json) = send(&app.router, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Incomplete form data");
    }

    #[tokio::test]
    async fn upload_after_deadline_is_forbidden() {
        let app = make_test_app().await;
        let folder = FolderModel::create(app.state.db(), "Analisis Puisi", Utc::now() - Duration::minutes(1), None)
            .await
            .unwrap();

        let req = multipart_request(
            &format!("/api/folders/{}/documents", folder.id),
            &student_fields(),
            &[("puisi.pdf", "application/pdf", PDF)],
        );
        let (status, json) = send(&app.router, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["success"], false);
        assert_eq!(
            DocumentModel::find_by_folder_id(app.state.db(), folder.id).await.unwrap().len(),
            0
        );
    }

    #[tokio::test]
    async fn upload_to_password_protected_folder() {
        let app = make_test_app().await;
        let folder = FolderModel::create(app.state.db(), "Aljabar Linear", Utc::now() + Duration::days(3), None)
            .await
            .unwrap();
        let mut active: FolderActive = folder.clone().into();
        active.use_password = Set(true);
        active.password = Set(Some("algebra123".into()));
        active.update(app.state.db()).await.unwrap();

        let uri = format!("/api/folders/{}/documents", folder.id);

        let mut fields = student_fields();
        fields.push(("password", "salah"));
        let (status, json) = send(
            &app.router,
            multipart_request(&uri, &fields, &[("a.pdf", "application/pdf", PDF)]),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "Invalid password");

        let mut fields = student_fields();
        fields.push(("password", "algebra123"));
        let (status, json) = send(
            &app.router,
            multipart_request(&uri, &fields, &[("a.pdf", "application/pdf", PDF)]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["results"][0]["success"], true);
    }

    #[tokio::test]
    async fn upload_to_unknown_folder_is_not_found() {
        let app = make_test_app().await;
        let req = multipart_request(
            "/api/folders/77/documents",
            &student_fields(),
            &[("a.pdf", "application/pdf", PDF)],
        );
        let (status, _) = send(&app.router, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
