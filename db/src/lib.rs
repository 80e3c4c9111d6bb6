pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use util::{config, paths};

/// Connects to the configured database.
///
/// `DATABASE_PATH` may be a full DSN or a plain SQLite file path; for SQLite the
/// parent directory of the file is created first.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    // SQLite won't create intermediate dirs.
    if let Some(file) = paths::sqlite_file(&path_or_url) {
        let _ = paths::ensure_parent_dir(file);
    }
    let url = paths::database_url(&path_or_url);
    tracing::info!(url = %url, "connecting to database");
    Database::connect(&url).await
}
