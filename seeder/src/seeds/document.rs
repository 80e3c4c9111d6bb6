use crate::seed::{SeedFuture, Seeder};
use chrono::Utc;
use db::models::{document, folder::Model as Folder};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use serde_json::json;

pub struct DocumentSeeder;

struct SeedDocument {
    id: &'static str,
    nrp: &'static str,
    email: &'static str,
    name_student: &'static str,
    class_name: &'static str,
    folder: &'static str,
    document_name: &'static str,
    similarity: f64,
    sources: &'static [&'static str],
    feedback: Option<&'static str>,
    page: i32,
    sentences: i32,
    content: &'static str,
    clustering: i32,
    grade: Option<&'static str>,
}

const DOCUMENTS: [SeedDocument; 6] = [
    SeedDocument {
        id: "550e8400-e29b-41d4-a716-446655440001",
        nrp: "5026211001",
        email: "john.doe@student.its.ac.id",
        name_student: "John Doe",
        class_name: "Informatika A",
        folder: "Praktikum DNS Server",
        document_name: "Laprak_BasicCMDofLinux_46.pdf",
        similarity: 0.15,
        sources: &[],
        feedback: Some("Laporan sudah baik, namun perlu penambahan analisis hasil"),
        page: 12,
        sentences: 145,
        content: "Laporan praktikum implementasi DNS server dengan konfigurasi BIND9...",
        clustering: 1,
        grade: Some("85.5"),
    },
    SeedDocument {
        id: "550e8400-e29b-41d4-a716-446655440002",
        nrp: "5026211002",
        email: "jane.smith@student.its.ac.id",
        name_student: "Jane Smith",
        class_name: "Informatika A",
        folder: "Aljabar Linear",
        document_name: "Tugas_AljabarLinear_Jane.pdf",
        similarity: 0.25,
        sources: &["source1.pdf", "website.com"],
        feedback: Some("Perhitungan matriks sudah benar, namun perlu penjelasan lebih detail"),
        page: 8,
        sentences: 98,
        content: "Penyelesaian sistem persamaan linear menggunakan metode eliminasi Gauss...",
        clustering: 2,
        grade: Some("78.0"),
    },
    SeedDocument {
        id: "550e8400-e29b-41d4-a716-446655440003",
        nrp: "5026211003",
        email: "bob.wilson@student.its.ac.id",
        name_student: "Bob Wilson",
        class_name: "Sistem Informasi A",
        folder: "Eksperimen Gerak",
        document_name: "Laporan_Fisika_Bob.pdf",
        similarity: 0.18,
        sources: &[],
        feedback: None,
        page: 10,
        sentences: 120,
        content: "Analisis gerak lurus beraturan dengan menggunakan ticker timer...",
        clustering: 1,
        grade: None,
    },
    SeedDocument {
        id: "550e8400-e29b-41d4-a716-446655440004",
        nrp: "5026211004",
        email: "alice.brown@student.its.ac.id",
        name_student: "Alice Brown",
        class_name: "Teknik Komputer A",
        folder: "Reaksi Kimia",
        document_name: "Tugas_Kimia_Alice.pdf",
        similarity: 0.12,
        sources: &[],
        feedback: Some("Analisis reaksi kimia sangat mendalam dan terstruktur dengan baik"),
        page: 15,
        sentences: 180,
        content: "Studi kasus reaksi redoks dalam industri metalurgi...",
        clustering: 3,
        grade: Some("92.0"),
    },
    SeedDocument {
        id: "550e8400-e29b-41d4-a716-446655440005",
        nrp: "5026211005",
        email: "charlie.davis@student.its.ac.id",
        name_student: "Charlie Davis",
        class_name: "Informatika B",
        folder: "Analisis Puisi",
        document_name: "Essay_Puisi_Charlie.pdf",
        similarity: 0.22,
        sources: &["literatur1.pdf"],
        feedback: Some("Analisis makna puisi cukup baik, namun perlu lebih banyak referensi"),
        page: 6,
        sentences: 85,
        content: "Analisis struktur dan makna puisi 'Aku' karya Chairil Anwar...",
        clustering: 2,
        grade: Some("80.5"),
    },
    SeedDocument {
        id: "550e8400-e29b-41d4-a716-446655440006",
        nrp: "5026211006",
        email: "diana.miller@student.its.ac.id",
        name_student: "Diana Miller",
        class_name: "Informatika A",
        folder: "Praktikum DNS Server",
        document_name: "DNS_Server_Diana.pdf",
        similarity: 0.35,
        sources: &["tutorial1.pdf", "documentation.com"],
        feedback: None,
        page: 14,
        sentences: 165,
        content: "Konfigurasi DNS server untuk domain universitas dengan multiple zones...",
        clustering: 1,
        grade: None,
    },
];

impl Seeder for DocumentSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            let base_url = util::config::public_base_url();
            for d in &DOCUMENTS {
                let folder_id = Folder::find_by_name(db, d.folder).await?.map(|f| f.id);
                let key = util::paths::submission_key(d.folder, d.class_name, d.document_name);

                document::ActiveModel {
                    id: Set(d.id.to_owned()),
                    nrp: Set(Some(d.nrp.to_owned())),
                    email: Set(Some(d.email.to_owned())),
                    name_student: Set(d.name_student.to_owned()),
                    class_name: Set(Some(d.class_name.to_owned())),
                    folder_id: Set(folder_id),
                    folder: Set(Some(d.folder.to_owned())),
                    document_name: Set(d.document_name.to_owned()),
                    document_url: Set(util::paths::public_url(&base_url, &key)),
                    uploaded_date: Set(Utc::now()),
                    grade: Set(d.grade.map(str::to_owned)),
                    feedback: Set(d.feedback.map(str::to_owned)),
                    plagiarism: Set(Some(json!({
                        "similarity": d.similarity,
                        "matched_sources": d.sources,
                        "is_plagiarized": false,
                    }))),
                    page: Set(Some(d.page)),
                    sentences: Set(Some(d.sentences)),
                    content: Set(Some(d.content.to_owned())),
                    clustering: Set(Some(d.clustering)),
                    embedding: Set(None),
                }
                .insert(db)
                .await?;
            }
            Ok(DOCUMENTS.len())
        })
    }
}
