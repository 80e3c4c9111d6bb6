use crate::seed::{Seeder, run_seeder};
use crate::seeds::{class::ClassSeeder, document::DocumentSeeder, folder::FolderSeeder};
use anyhow::Context;
use colored::*;
use db::models::{class, document, folder};
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, EntityTrait};

mod seed;
mod seeds;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let db = db::connect().await.context("connecting to database")?;
    Migrator::up(&db, None).await.context("running migrations")?;

    clear(&db).await?;

    for (seeder, name) in [
        (Box::new(ClassSeeder) as Box<dyn Seeder + Send + Sync>, "Class"),
        (Box::new(FolderSeeder), "Folder"),
        (Box::new(DocumentSeeder), "Document"),
    ] {
        run_seeder(&*seeder, name, &db).await?;
    }

    println!("{}", "Seeding complete".green().bold());
    Ok(())
}

/// Removes existing rows so the demo data can be loaded repeatedly.
async fn clear(db: &DatabaseConnection) -> anyhow::Result<()> {
    document::Entity::delete_many().exec(db).await?;
    folder::Entity::delete_many().exec(db).await?;
    class::Entity::delete_many().exec(db).await?;
    Ok(())
}
