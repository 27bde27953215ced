//! REST DTOs with serde derives for HTTP API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payroll row response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PayrollRowDto {
    pub id: i64,
    pub nik: String,
    /// "YYYY-MM"
    #[schema(example = "2025-03")]
    pub period: String,
    #[schema(value_type = String, example = "5000000.00")]
    pub base_salary: Decimal,
    #[schema(value_type = String, example = "750000.00")]
    pub allowances: Decimal,
    #[schema(value_type = String, example = "250000.00")]
    pub deductions: Decimal,
    #[schema(value_type = String, example = "5500000.00")]
    pub net: Decimal,
    pub published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Upsert payroll row request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertPayrollRequest {
    pub nik: String,
    /// "YYYY-MM"
    #[schema(example = "2025-03")]
    pub period: String,
    #[schema(value_type = String, example = "5000000.00")]
    pub base_salary: Decimal,
    #[schema(value_type = String, example = "750000.00")]
    pub allowances: Decimal,
    #[schema(value_type = String, example = "250000.00")]
    pub deductions: Decimal,
}

/// Publish a payroll period
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PublishPeriodRequest {
    /// "YYYY-MM"
    #[schema(example = "2025-03")]
    pub period: String,
}

/// Publish outcome
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublishPeriodResponse {
    pub period: String,
    pub published: u64,
}

/// List of payroll rows
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PayrollListResponse {
    pub items: Vec<PayrollRowDto>,
    pub total: usize,
}

impl From<crate::contract::PayrollRow> for PayrollRowDto {
    fn from(row: crate::contract::PayrollRow) -> Self {
        Self {
            id: row.id,
            nik: row.nik,
            period: row.period.to_string(),
            base_salary: row.base_salary,
            allowances: row.allowances,
            deductions: row.deductions,
            net: row.net,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
