use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202506010003_create_documents"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("documents"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("nrp")).text().null())
                    .col(ColumnDef::new(Alias::new("email")).text().null())
                    .col(ColumnDef::new(Alias::new("name_student")).text().not_null())
                    .col(ColumnDef::new(Alias::new("class_name")).text().null())
                    // No foreign key: deleting a folder leaves its documents in place.
                    .col(ColumnDef::new(Alias::new("folder_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("folder")).text().null())
                    .col(ColumnDef::new(Alias::new("document_name")).text().not_null())
                    .col(ColumnDef::new(Alias::new("document_url")).text().not_null())
                    .col(
                        ColumnDef::new(Alias::new("uploaded_date"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(ColumnDef::new(Alias::new("grade")).text().null())
                    .col(ColumnDef::new(Alias::new("feedback")).text().null())
                    .col(ColumnDef::new(Alias::new("plagiarism")).json().null())
                    .col(ColumnDef::new(Alias::new("page")).integer().null())
                    .col(ColumnDef::new(Alias::new("sentences")).integer().null())
                    .col(ColumnDef::new(Alias::new("content")).text().null())
                    .col(ColumnDef::new(Alias::new("clustering")).integer().null())
                    .col(ColumnDef::new(Alias::new("embedding")).json().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_documents_folder_id")
                    .table(Alias::new("documents"))
                    .col(Alias::new("folder_id"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_documents_folder")
                    .table(Alias::new("documents"))
                    .col(Alias::new("folder"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("documents")).to_owned())
            .await
    }
}
