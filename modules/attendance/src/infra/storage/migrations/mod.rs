//! Database migrations for the attendance module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_attendance::Migration)]
    }

    // Each module keeps its own migration bookkeeping table
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("attendance_migrations").into_iden()
    }
}

mod m20250301_000001_create_attendance {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AttendanceRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AttendanceRecords::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(AttendanceRecords::Nik).string().not_null())
                        .col(ColumnDef::new(AttendanceRecords::Date).date().not_null())
                        .col(
                            ColumnDef::new(AttendanceRecords::CheckIn)
                                .time()
                                .not_null(),
                        )
                        .col(ColumnDef::new(AttendanceRecords::CheckOut).time())
                        .col(
                            ColumnDef::new(AttendanceRecords::Status)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(AttendanceRecords::Note).string())
                        .to_owned(),
                )
                .await?;

            // One record per employee per day
            manager
                .create_index(
                    Index::create()
                        .name("idx_attendance_nik_date")
                        .table(AttendanceRecords::Table)
                        .col(AttendanceRecords::Nik)
                        .col(AttendanceRecords::Date)
                        .unique()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum AttendanceRecords {
        Table,
        Id,
        Nik,
        Date,
        CheckIn,
        CheckOut,
        Status,
        Note,
    }
}
