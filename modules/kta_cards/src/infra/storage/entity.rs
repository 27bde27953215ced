//! SeaORM entity for the card requests table

use sea_orm::entity::prelude::*;

/// Card requests table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "card_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub nik: String,

    /// Stored as "new" | "replacement"
    pub request_type: String,

    pub reason: String,

    /// Stored as "pending" | "printed" | "delivered" | "rejected"
    pub status: String,

    pub processed_by: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
