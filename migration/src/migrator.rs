use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202506010001_create_classes::Migration),
            Box::new(migrations::m202506010002_create_folders::Migration),
            Box::new(migrations::m202506010003_create_documents::Migration),
        ]
    }
}
