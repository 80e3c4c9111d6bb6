use crate::seed::{SeedFuture, Seeder};
use chrono::{NaiveDate, Utc};
use db::models::folder::{self, thresholds_to_json};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};

pub struct FolderSeeder;

struct SeedFolder {
    name: &'static str,
    due: (i32, u32, u32),
    class_name: &'static str,
    description: &'static str,
    attachment_url: &'static str,
    thresholds: [f64; 2],
    password: Option<&'static str>,
}

const FOLDERS: [SeedFolder; 5] = [
    SeedFolder {
        name: "Praktikum DNS Server",
        due: (2024, 2, 15),
        class_name: "Informatika A",
        description: "Implementasi DNS Server menggunakan BIND9 pada sistem Linux",
        attachment_url: "https://example.com/praktikum-dns-server.pdf",
        thresholds: [0.8, 0.9],
        password: None,
    },
    SeedFolder {
        name: "Aljabar Linear",
        due: (2024, 2, 20),
        class_name: "Informatika A",
        description: "Soal-soal aljabar linear dan transformasi matriks",
        attachment_url: "https://example.com/aljabar-linear.pdf",
        thresholds: [0.75, 0.85],
        password: Some("algebra123"),
    },
    SeedFolder {
        name: "Analisis Puisi",
        due: (2024, 2, 25),
        class_name: "Informatika B",
        description: "Analisis struktur dan makna puisi Indonesia modern",
        attachment_url: "https://example.com/assignment3.pdf",
        thresholds: [0.7, 0.8],
        password: None,
    },
    SeedFolder {
        name: "Eksperimen Gerak",
        due: (2024, 3, 1),
        class_name: "Sistem Informasi A",
        description: "Laporan praktikum fisika tentang gerak lurus beraturan",
        attachment_url: "https://example.com/assignment4.pdf",
        thresholds: [0.8, 0.9],
        password: None,
    },
    SeedFolder {
        name: "Reaksi Kimia",
        due: (2024, 3, 5),
        class_name: "Teknik Komputer A",
        description: "Studi kasus reaksi kimia dalam proses industri",
        attachment_url: "https://example.com/assignment5.pdf",
        thresholds: [0.75, 0.85],
        password: Some("kimia456"),
    },
];

impl Seeder for FolderSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            for f in &FOLDERS {
                let (y, m, d) = f.due;
                let due_date = NaiveDate::from_ymd_opt(y, m, d)
                    .and_then(|date| date.and_hms_opt(23, 59, 59))
                    .map(|dt| dt.and_utc())
                    .unwrap_or_else(Utc::now);

                folder::ActiveModel {
                    name_assignment: Set(f.name.to_owned()),
                    due_date: Set(due_date),
                    class_name: Set(Some(f.class_name.to_owned())),
                    description: Set(Some(f.description.to_owned())),
                    attachment_url: Set(Some(f.attachment_url.to_owned())),
                    plagiarism_thresholds: Set(Some(thresholds_to_json(&f.thresholds))),
                    use_password: Set(f.password.is_some()),
                    password: Set(f.password.map(str::to_owned)),
                    created_at: Set(Utc::now()),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
            Ok(FOLDERS.len())
        })
    }
}
