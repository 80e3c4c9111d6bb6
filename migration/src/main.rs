use std::fs;
use std::path::Path;
use util::{config, paths};

mod runner;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Same resolution as the api and seeder: a SQLite file path or a full DSN.
    let path_or_url = config::database_path();
    let url = paths::database_url(&path_or_url);
    let db_file = paths::sqlite_file(&path_or_url);
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(db_file.as_deref());
        }
        Some("fresh") => {
            remove_db_file(db_file.as_deref());
            create_db_dir(db_file.as_deref());
            runner::run_all_migrations(&url).await;
        }
        _ => {
            create_db_dir(db_file.as_deref());
            runner::run_all_migrations(&url).await;
        }
    }
}

fn remove_db_file(db_path: Option<&Path>) {
    match db_path {
        Some(db_path) if db_path.exists() => {
            fs::remove_file(db_path).expect("Failed to delete DB file");
            println!("Deleted DB: {}", db_path.display());
        }
        Some(db_path) => println!("DB file does not exist: {}", db_path.display()),
        None => println!("DATABASE_PATH does not name a SQLite file; nothing to delete"),
    }

    // Uploaded submissions go with the database they were recorded in.
    let storage_path = paths::storage_root();
    if storage_path.exists() {
        fs::remove_dir_all(&storage_path).expect("Failed to delete submission storage");
        println!("Deleted submission storage: {}", storage_path.display());
    } else {
        println!("Submission storage does not exist: {}", storage_path.display());
    }
}

fn create_db_dir(db_path: Option<&Path>) {
    if let Some(db_path) = db_path {
        paths::ensure_parent_dir(db_path).expect("Failed to create DB directory");
    }
}
