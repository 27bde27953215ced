//! SeaORM entity for the payroll rows table

use sea_orm::entity::prelude::*;

/// Payroll rows table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "payroll_rows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub nik: String,

    /// "YYYY-MM"
    pub period: String,

    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub base_salary: Decimal,

    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub allowances: Decimal,

    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub deductions: Decimal,

    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub net: Decimal,

    pub published: bool,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
