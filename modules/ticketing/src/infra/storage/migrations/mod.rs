//! Database migrations for the ticketing module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_tickets::Migration),
            Box::new(m20250301_000002_create_status_history::Migration),
            Box::new(m20250301_000003_create_assignments::Migration),
        ]
    }

    // Each module keeps its own migration bookkeeping table
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("ticketing_migrations").into_iden()
    }
}

mod m20250301_000001_create_tickets {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Tickets::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Tickets::Id).uuid().not_null().primary_key())
                        .col(
                            ColumnDef::new(Tickets::Code)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Tickets::ReporterNik).string().not_null())
                        .col(ColumnDef::new(Tickets::AssigneeNik).string())
                        .col(ColumnDef::new(Tickets::Category).string().not_null())
                        .col(ColumnDef::new(Tickets::Priority).string().not_null())
                        .col(ColumnDef::new(Tickets::Subject).string().not_null())
                        .col(ColumnDef::new(Tickets::Description).text().not_null())
                        .col(ColumnDef::new(Tickets::Status).string().not_null())
                        .col(
                            ColumnDef::new(Tickets::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Tickets::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Tickets::LastActivityAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Tickets::ClosedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_tickets_status")
                        .table(Tickets::Table)
                        .col(Tickets::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_tickets_assignee")
                        .table(Tickets::Table)
                        .col(Tickets::AssigneeNik)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_tickets_reporter")
                        .table(Tickets::Table)
                        .col(Tickets::ReporterNik)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Tickets::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Tickets {
        Table,
        Id,
        Code,
        ReporterNik,
        AssigneeNik,
        Category,
        Priority,
        Subject,
        Description,
        Status,
        CreatedAt,
        UpdatedAt,
        LastActivityAt,
        ClosedAt,
    }
}

mod m20250301_000002_create_status_history {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TicketStatusHistory::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TicketStatusHistory::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(TicketStatusHistory::TicketId)
                                .uuid()
                                .not_null(),
                        )
                        .col(ColumnDef::new(TicketStatusHistory::FromStatus).string())
                        .col(
                            ColumnDef::new(TicketStatusHistory::ToStatus)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TicketStatusHistory::ChangedBy)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(TicketStatusHistory::Note).string())
                        .col(
                            ColumnDef::new(TicketStatusHistory::ChangedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_history_ticket")
                                .from(TicketStatusHistory::Table, TicketStatusHistory::TicketId)
                                .to(Tickets::Table, Tickets::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_history_ticket_id")
                        .table(TicketStatusHistory::Table)
                        .col(TicketStatusHistory::TicketId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TicketStatusHistory::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum TicketStatusHistory {
        Table,
        Id,
        TicketId,
        FromStatus,
        ToStatus,
        ChangedBy,
        Note,
        ChangedAt,
    }

    #[derive(DeriveIden)]
    enum Tickets {
        Table,
        Id,
    }
}

mod m20250301_000003_create_assignments {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TicketAssignments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TicketAssignments::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(TicketAssignments::TicketId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TicketAssignments::AssigneeNik)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TicketAssignments::AssignedBy)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TicketAssignments::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(TicketAssignments::AssignedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assignment_ticket")
                                .from(TicketAssignments::Table, TicketAssignments::TicketId)
                                .to(Tickets::Table, Tickets::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_assignments_ticket_active")
                        .table(TicketAssignments::Table)
                        .col(TicketAssignments::TicketId)
                        .col(TicketAssignments::Active)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TicketAssignments::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum TicketAssignments {
        Table,
        Id,
        TicketId,
        AssigneeNik,
        AssignedBy,
        Active,
        AssignedAt,
    }

    #[derive(DeriveIden)]
    enum Tickets {
        Table,
        Id,
    }
}
