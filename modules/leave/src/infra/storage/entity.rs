//! SeaORM entities for leave and shift-swap tables

use sea_orm::entity::prelude::*;

/// Leave requests table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "leave_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub nik: String,

    /// Stored as "annual" | "sick" | "unpaid"
    pub leave_type: String,

    pub start_date: Date,

    pub end_date: Date,

    pub reason: String,

    /// Stored as "pending" | "approved" | "rejected" | "cancelled"
    pub status: String,

    pub decided_by: Option<String>,

    pub decided_at: Option<DateTimeUtc>,

    pub decision_note: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Shift swap module
pub mod shift_swap {
    use sea_orm::entity::prelude::*;

    /// Shift swaps table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "shift_swaps")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        pub requester_nik: String,

        pub counterpart_nik: String,

        pub own_shift_date: Date,

        pub counterpart_shift_date: Date,

        pub reason: String,

        pub status: String,

        pub decided_by: Option<String>,

        pub decided_at: Option<DateTimeUtc>,

        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
