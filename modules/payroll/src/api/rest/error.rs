//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::PayrollError;
use http_problem::Problem;

/// Map payroll domain errors to HTTP Problem Details
pub fn map_domain_error(error: PayrollError) -> Problem {
    match error {
        PayrollError::NotFound { nik, period } => {
            Problem::not_found("Payroll row", format!("{}/{}", nik, period))
        }

        PayrollError::AlreadyPublished { nik, period } => Problem::conflict(format!(
            "Payroll row for {} in {} is already published",
            nik, period
        )),

        PayrollError::Validation { message } => Problem::validation(message),

        PayrollError::Internal => Problem::internal(),
    }
}
