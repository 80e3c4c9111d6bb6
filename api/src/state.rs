use sea_orm::DatabaseConnection;
use services::ai_service::AiServiceClient;
use services::email::{EmailService, SmtpSettings};
use services::error::ServiceResult;
use services::folder_service::FolderService;
use services::grading::GradingService;
use services::storage::SubmissionStorage;
use services::submission::SubmissionService;
use util::{config, paths, revalidate::Revalidator};

/// Shared handles passed to every route.
///
/// Cloning is cheap: the connection pool, HTTP client, SMTP transport and
/// broadcast sender are all reference counted internally.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    storage: SubmissionStorage,
    ai: AiServiceClient,
    email: EmailService,
    revalidator: Revalidator,
    max_upload_bytes: u64,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        storage: SubmissionStorage,
        ai: AiServiceClient,
        email: EmailService,
        revalidator: Revalidator,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            db,
            storage,
            ai,
            email,
            revalidator,
            max_upload_bytes,
        }
    }

    /// Builds the state from the global configuration.
    pub fn from_config(db: DatabaseConnection) -> ServiceResult<Self> {
        let storage_root = paths::ensure_dir(paths::storage_root())?;
        let storage = SubmissionStorage::new(storage_root, config::public_base_url());
        let ai = AiServiceClient::new(config::ai_service_url(), config::ai_service_token());
        let email = EmailService::from_settings(&SmtpSettings {
            host: config::smtp_host(),
            port: config::smtp_port(),
            username: config::smtp_username(),
            password: config::smtp_password(),
            from_address: config::email_from_address(),
            from_name: config::email_from_name(),
        })?;

        Ok(Self::new(
            db,
            storage,
            ai,
            email,
            Revalidator::new(),
            config::max_upload_bytes() as u64,
        ))
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn storage(&self) -> &SubmissionStorage {
        &self.storage
    }

    pub fn ai(&self) -> &AiServiceClient {
        &self.ai
    }

    pub fn email(&self) -> &EmailService {
        &self.email
    }

    pub fn revalidator(&self) -> &Revalidator {
        &self.revalidator
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    pub fn folders(&self) -> FolderService {
        FolderService::new(self.db.clone(), self.revalidator.clone())
    }

    pub fn grading(&self) -> GradingService {
        GradingService::new(self.db.clone(), self.revalidator.clone())
    }

    pub fn submissions(&self) -> SubmissionService {
        SubmissionService::new(
            self.db.clone(),
            self.storage.clone(),
            self.ai.clone(),
            self.revalidator.clone(),
            self.max_upload_bytes,
        )
    }
}
