//! Domain service - payroll rows, net computation and publication

use super::repository::PayrollRepository;
use crate::contract::{PayrollError, PayrollInput, PayrollRow, Period};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Domain service for payroll
pub struct Service {
    rows: Arc<dyn PayrollRepository>,
}

impl Service {
    pub fn new(rows: Arc<dyn PayrollRepository>) -> Self {
        Self { rows }
    }

    /// Create or overwrite the row for one employee and period
    ///
    /// Net pay is recomputed from the amounts; a published row is immutable.
    pub async fn upsert(
        &self,
        nik: &str,
        period: &Period,
        input: PayrollInput,
    ) -> Result<PayrollRow, PayrollError> {
        if nik.trim().is_empty() {
            return Err(PayrollError::Validation {
                message: "nik must not be empty".to_string(),
            });
        }
        if input.base_salary < Decimal::ZERO
            || input.allowances < Decimal::ZERO
            || input.deductions < Decimal::ZERO
        {
            return Err(PayrollError::Validation {
                message: "amounts must not be negative".to_string(),
            });
        }

        let existing = self
            .rows
            .find(nik, period)
            .await
            .map_err(|e| internal("find payroll row", e))?;

        let row = match existing {
            Some(mut row) => {
                if row.published {
                    return Err(PayrollError::AlreadyPublished {
                        nik: nik.to_string(),
                        period: period.to_string(),
                    });
                }
                row.base_salary = input.base_salary;
                row.allowances = input.allowances;
                row.deductions = input.deductions;
                row.net = input.net();
                row.updated_at = Utc::now();
                self.rows
                    .update(&row)
                    .await
                    .map_err(|e| internal("update payroll row", e))?
            }
            None => self
                .rows
                .insert(nik, period, &input)
                .await
                .map_err(|e| internal("insert payroll row", e))?,
        };

        tracing::info!(nik, period = %period, net = %row.net, "payroll row upserted");
        Ok(row)
    }

    /// All rows of a period, admin view
    pub async fn list_period(&self, period: &Period) -> Result<Vec<PayrollRow>, PayrollError> {
        self.rows
            .list_period(period)
            .await
            .map_err(|e| internal("list payroll period", e))
    }

    /// Publish every row of a period; returns the number of rows flagged
    pub async fn publish_period(&self, period: &Period) -> Result<u64, PayrollError> {
        let published = self
            .rows
            .publish_period(period)
            .await
            .map_err(|e| internal("publish payroll period", e))?;

        tracing::info!(period = %period, published, "payroll period published");
        Ok(published)
    }

    /// An employee's slip; hidden until the row is published
    pub async fn slip(&self, nik: &str, period: &Period) -> Result<PayrollRow, PayrollError> {
        let row = self
            .rows
            .find(nik, period)
            .await
            .map_err(|e| internal("find payroll row", e))?;

        // An unpublished row is indistinguishable from a missing one
        match row {
            Some(row) if row.published => Ok(row),
            _ => Err(PayrollError::NotFound {
                nik: nik.to_string(),
                period: period.to_string(),
            }),
        }
    }

    /// Admin view of one row, published or not
    pub async fn row(&self, nik: &str, period: &Period) -> Result<PayrollRow, PayrollError> {
        self.rows
            .find(nik, period)
            .await
            .map_err(|e| internal("find payroll row", e))?
            .ok_or_else(|| PayrollError::NotFound {
                nik: nik.to_string(),
                period: period.to_string(),
            })
    }
}

fn internal(context: &str, error: anyhow::Error) -> PayrollError {
    tracing::error!("{}: {:?}", context, error);
    PayrollError::Internal
}
