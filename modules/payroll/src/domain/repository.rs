//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{PayrollInput, PayrollRow, Period};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for payroll rows
#[async_trait]
pub trait PayrollRepository: Send + Sync {
    /// Insert a new unpublished row with the given amounts
    async fn insert(&self, nik: &str, period: &Period, input: &PayrollInput)
        -> Result<PayrollRow>;

    /// Find the row for one employee and period
    async fn find(&self, nik: &str, period: &Period) -> Result<Option<PayrollRow>>;

    /// All rows of a period, ordered by NIK
    async fn list_period(&self, period: &Period) -> Result<Vec<PayrollRow>>;

    /// Persist changes to an existing row
    async fn update(&self, row: &PayrollRow) -> Result<PayrollRow>;

    /// Flag every row of a period as published; returns affected row count
    async fn publish_period(&self, period: &Period) -> Result<u64>;
}
