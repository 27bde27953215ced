//! Payroll Module
//!
//! Monthly payroll rows keyed by employee and period ("YYYY-MM"). Admins
//! upsert and publish rows; employees see their own slip only after the
//! period is published. Net pay is always recomputed on write.

pub mod contract;
pub use contract::{error::PayrollError, PayrollInput, PayrollRow, Period};

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
