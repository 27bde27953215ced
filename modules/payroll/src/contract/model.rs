//! Contract models for payroll

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A validated "YYYY-MM" payroll period
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period(String);

impl Period {
    /// Parse a period string; the month must be 01..=12
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return None;
        }
        if !bytes[..4].iter().all(u8::is_ascii_digit) {
            return None;
        }
        let month: u8 = s[5..7].parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One employee's payroll row for one period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRow {
    pub id: i64,
    pub nik: String,
    pub period: Period,
    pub base_salary: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    /// base_salary + allowances - deductions, recomputed on every write
    pub net: Decimal,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input amounts for an upsert; net is derived, never accepted
#[derive(Debug, Clone)]
pub struct PayrollInput {
    pub base_salary: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
}

impl PayrollInput {
    pub fn net(&self) -> Decimal {
        self.base_salary + self.allowances - self.deductions
    }
}
