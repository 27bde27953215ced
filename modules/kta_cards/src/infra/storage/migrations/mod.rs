//! Database migrations for the KTA cards module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_card_requests::Migration)]
    }

    // Each module keeps its own migration bookkeeping table
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("kta_cards_migrations").into_iden()
    }
}

mod m20250301_000001_create_card_requests {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CardRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CardRequests::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(CardRequests::Nik).string().not_null())
                        .col(
                            ColumnDef::new(CardRequests::RequestType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(CardRequests::Reason).string().not_null())
                        .col(ColumnDef::new(CardRequests::Status).string().not_null())
                        .col(ColumnDef::new(CardRequests::ProcessedBy).string())
                        .col(
                            ColumnDef::new(CardRequests::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CardRequests::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_card_requests_nik")
                        .table(CardRequests::Table)
                        .col(CardRequests::Nik)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CardRequests::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum CardRequests {
        Table,
        Id,
        Nik,
        RequestType,
        Reason,
        Status,
        ProcessedBy,
        CreatedAt,
        UpdatedAt,
    }
}
