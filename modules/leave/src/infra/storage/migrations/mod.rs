//! Database migrations for the leave module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_leave_requests::Migration),
            Box::new(m20250301_000002_create_shift_swaps::Migration),
        ]
    }

    // Each module keeps its own migration bookkeeping table
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("leave_migrations").into_iden()
    }
}

mod m20250301_000001_create_leave_requests {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(LeaveRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(LeaveRequests::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(LeaveRequests::Nik).string().not_null())
                        .col(
                            ColumnDef::new(LeaveRequests::LeaveType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(LeaveRequests::StartDate)
                                .date()
                                .not_null(),
                        )
                        .col(ColumnDef::new(LeaveRequests::EndDate).date().not_null())
                        .col(ColumnDef::new(LeaveRequests::Reason).string().not_null())
                        .col(ColumnDef::new(LeaveRequests::Status).string().not_null())
                        .col(ColumnDef::new(LeaveRequests::DecidedBy).string())
                        .col(ColumnDef::new(LeaveRequests::DecidedAt).timestamp_with_time_zone())
                        .col(ColumnDef::new(LeaveRequests::DecisionNote).string())
                        .col(
                            ColumnDef::new(LeaveRequests::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_leave_requests_nik")
                        .table(LeaveRequests::Table)
                        .col(LeaveRequests::Nik)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_leave_requests_status")
                        .table(LeaveRequests::Table)
                        .col(LeaveRequests::Status)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(LeaveRequests::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum LeaveRequests {
        Table,
        Id,
        Nik,
        LeaveType,
        StartDate,
        EndDate,
        Reason,
        Status,
        DecidedBy,
        DecidedAt,
        DecisionNote,
        CreatedAt,
    }
}

mod m20250301_000002_create_shift_swaps {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ShiftSwaps::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ShiftSwaps::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ShiftSwaps::RequesterNik)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ShiftSwaps::CounterpartNik)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ShiftSwaps::OwnShiftDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ShiftSwaps::CounterpartShiftDate)
                                .date()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ShiftSwaps::Reason).string().not_null())
                        .col(ColumnDef::new(ShiftSwaps::Status).string().not_null())
                        .col(ColumnDef::new(ShiftSwaps::DecidedBy).string())
                        .col(ColumnDef::new(ShiftSwaps::DecidedAt).timestamp_with_time_zone())
                        .col(
                            ColumnDef::new(ShiftSwaps::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_shift_swaps_requester")
                        .table(ShiftSwaps::Table)
                        .col(ShiftSwaps::RequesterNik)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ShiftSwaps::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ShiftSwaps {
        Table,
        Id,
        RequesterNik,
        CounterpartNik,
        OwnShiftDate,
        CounterpartShiftDate,
        Reason,
        Status,
        DecidedBy,
        DecidedAt,
        CreatedAt,
    }
}
