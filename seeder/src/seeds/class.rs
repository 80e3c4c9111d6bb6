use crate::seed::{SeedFuture, Seeder};
use db::models::class::Model as Class;
use sea_orm::DatabaseConnection;

pub struct ClassSeeder;

const CLASSES: [(&str, i32); 4] = [
    ("Informatika A", 30),
    ("Informatika B", 28),
    ("Sistem Informasi A", 32),
    ("Teknik Komputer A", 25),
];

impl Seeder for ClassSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            for (name, total) in CLASSES {
                Class::create(db, name, total).await?;
            }
            Ok(CLASSES.len())
        })
    }
}
