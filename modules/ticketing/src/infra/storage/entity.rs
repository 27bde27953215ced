//! SeaORM entities for ticketing tables

use sea_orm::entity::prelude::*;

/// Tickets table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Human-facing reference code
    #[sea_orm(unique)]
    pub code: String,

    pub reporter_nik: String,

    pub assignee_nik: Option<String>,

    pub category: String,

    /// Stored as "low" | "medium" | "high" | "urgent"
    pub priority: String,

    pub subject: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Stored as the lifecycle state's snake_case name
    pub status: String,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,

    pub last_activity_at: DateTimeUtc,

    pub closed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "history::Entity")]
    History,
    #[sea_orm(has_many = "assignment::Entity")]
    Assignments,
}

impl Related<history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::History.def()
    }
}

impl Related<assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Status history module
pub mod history {
    use sea_orm::entity::prelude::*;

    /// Ticket status history table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "ticket_status_history")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        pub ticket_id: Uuid,

        /// Null on the creation entry
        pub from_status: Option<String>,

        pub to_status: String,

        /// NIK of the actor, or "system"
        pub changed_by: String,

        pub note: Option<String>,

        pub changed_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::TicketId",
            to = "super::Column::Id"
        )]
        Ticket,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Ticket.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Assignment module
pub mod assignment {
    use sea_orm::entity::prelude::*;

    /// Ticket assignments table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "ticket_assignments")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        pub ticket_id: Uuid,

        pub assignee_nik: String,

        pub assigned_by: String,

        /// At most one active row per ticket
        pub active: bool,

        pub assigned_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::TicketId",
            to = "super::Column::Id"
        )]
        Ticket,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Ticket.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
