//! Assignment folders.
//!
//! A folder is one assignment: a name, a due date and optional presentation data.
//! Submissions point at a folder through `documents.folder_id`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};
use util::deadline::{self, DeadlineStatus};

use super::document;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "folders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Assignment name. Used for lookups but not unique.
    pub name_assignment: String,
    pub due_date: DateTime<Utc>,
    pub class_name: Option<String>,
    pub description: Option<String>,
    pub attachment_url: Option<String>,
    /// JSON array of threshold strings, in the order they were given.
    pub plagiarism_thresholds: Option<Json>,
    pub use_password: bool,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::document::Entity")]
    Documents,
}

impl Related<document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A folder together with the number of submissions filed under it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FolderWithCount {
    #[serde(flatten)]
    pub folder: Model,
    pub document_count: u64,
}

/// Converts numeric thresholds into the stored textual form (`0.8` → `"0.8"`, `1.0` → `"1"`).
pub fn thresholds_to_json(values: &[f64]) -> Json {
    Json::Array(
        values
            .iter()
            .map(|v| Json::String(v.to_string()))
            .collect(),
    )
}

impl Model {
    /// Inserts a folder with just the required fields. Mostly for fixtures.
    pub async fn create(
        db: &DbConn,
        name_assignment: &str,
        due_date: DateTime<Utc>,
        class_name: Option<&str>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            name_assignment: Set(name_assignment.to_owned()),
            due_date: Set(due_date),
            class_name: Set(class_name.map(str::to_owned)),
            use_password: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Exact, case-sensitive name lookup. Returns the oldest match if names collide.
    pub async fn find_by_name(db: &DbConn, name: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::NameAssignment.eq(name))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .one(db)
            .await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Deletes a folder. Its documents are left untouched.
    ///
    /// Returns `false` when no row matched.
    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    /// Number of documents filed under this folder.
    pub async fn count_documents(db: &DbConn, id: i64) -> Result<u64, DbErr> {
        document::Entity::find()
            .filter(document::Column::FolderId.eq(id))
            .count(db)
            .await
    }

    /// Document count per folder id, for every folder that has at least one document.
    pub async fn document_counts(db: &DbConn) -> Result<HashMap<i64, u64>, DbErr> {
        let rows: Vec<(Option<i64>, i64)> = document::Entity::find()
            .select_only()
            .column(document::Column::FolderId)
            .column_as(Expr::col(document::Column::Id).count(), "document_count")
            .filter(document::Column::FolderId.is_not_null())
            .group_by(document::Column::FolderId)
            .into_tuple()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(folder_id, count)| folder_id.map(|id| (id, count.max(0) as u64)))
            .collect())
    }

    /// All folders in creation order, each with its document count.
    pub async fn list_with_counts(db: &DbConn) -> Result<Vec<FolderWithCount>, DbErr> {
        let folders = Self::list(db).await?;
        let counts = Self::document_counts(db).await?;

        Ok(folders
            .into_iter()
            .map(|folder| {
                let document_count = counts.get(&folder.id).copied().unwrap_or(0);
                FolderWithCount {
                    folder,
                    document_count,
                }
            })
            .collect())
    }

    pub async fn with_count(self, db: &DbConn) -> Result<FolderWithCount, DbErr> {
        let document_count = Self::count_documents(db, self.id).await?;
        Ok(FolderWithCount {
            folder: self,
            document_count,
        })
    }

    /// Stored thresholds as strings, in their original order.
    pub fn thresholds(&self) -> Vec<String> {
        match &self.plagiarism_thresholds {
            Some(Json::Array(values)) => values
                .iter()
                .map(|v| match v {
                    Json::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn deadline_status(&self, now: DateTime<Utc>) -> DeadlineStatus {
        deadline::evaluate(self.due_date, now)
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        deadline::is_active(self.due_date, now)
    }

    /// Whether an upload must present a password.
    ///
    /// A flag without a usable password gates nothing.
    pub fn requires_password(&self) -> bool {
        self.use_password && self.password.as_deref().is_some_and(|p| !p.is_empty())
    }
}
