//! SeaORM entity for the attendance table

use sea_orm::entity::prelude::*;

/// Attendance records table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub nik: String,

    pub date: Date,

    pub check_in: Time,

    pub check_out: Option<Time>,

    /// Stored as "on_time" | "late"
    pub status: String,

    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
