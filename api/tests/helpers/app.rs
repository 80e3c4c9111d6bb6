use api::{routes::routes, state::AppState};
use axum::Router;
use db::test_utils::setup_test_db;
use lettre::transport::stub::AsyncStubTransport;
use services::{
    ai_service::AiServiceClient, email::EmailService, storage::SubmissionStorage,
};
use tempfile::TempDir;
use util::revalidate::Revalidator;

/// Nothing listens on the discard port, so processing notifications fail fast.
const UNREACHABLE_AI: &str = "http://127.0.0.1:9";

pub const TEST_MAX_UPLOAD_BYTES: u64 = 64 * 1024;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub mail: AsyncStubTransport,
    pub storage_dir: TempDir,
}

pub async fn make_test_app() -> TestApp {
    make_test_app_with_ai(UNREACHABLE_AI).await
}

/// Router over a fresh in-memory database, a temporary storage root and a stub mailer.
pub async fn make_test_app_with_ai(ai_url: &str) -> TestApp {
    let db = setup_test_db().await;
    let storage_dir = tempfile::tempdir().expect("Failed to create storage dir");
    let mail = AsyncStubTransport::new_ok();

    let state = AppState::new(
        db,
        SubmissionStorage::new(storage_dir.path(), "http://localhost:3000"),
        AiServiceClient::new(ai_url, "test-token"),
        EmailService::stub(mail.clone(), "Tim Pengajar", "noreply@example.com")
            .expect("Failed to build stub mailer"),
        Revalidator::new(),
        TEST_MAX_UPLOAD_BYTES,
    );

    let router = Router::new().nest("/api", routes(state.clone()));

    TestApp {
        router,
        state,
        mail,
        storage_dir,
    }
}
