//! Database migrations for the payroll module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_payroll_rows::Migration)]
    }

    // Each module keeps its own migration bookkeeping table
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("payroll_migrations").into_iden()
    }
}

mod m20250301_000001_create_payroll_rows {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PayrollRows::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PayrollRows::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PayrollRows::Nik).string().not_null())
                        .col(ColumnDef::new(PayrollRows::Period).string().not_null())
                        .col(
                            ColumnDef::new(PayrollRows::BaseSalary)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PayrollRows::Allowances)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PayrollRows::Deductions)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PayrollRows::Net)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PayrollRows::Published)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(PayrollRows::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PayrollRows::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            // One row per employee per period
            manager
                .create_index(
                    Index::create()
                        .name("idx_payroll_nik_period")
                        .table(PayrollRows::Table)
                        .col(PayrollRows::Nik)
                        .col(PayrollRows::Period)
                        .unique()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PayrollRows::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PayrollRows {
        Table,
        Id,
        Nik,
        Period,
        BaseSalary,
        Allowances,
        Deductions,
        Net,
        Published,
        CreatedAt,
        UpdatedAt,
    }
}
