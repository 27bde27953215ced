//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::LeaveError;
use http_problem::Problem;

/// Map leave domain errors to HTTP Problem Details
pub fn map_domain_error(error: LeaveError) -> Problem {
    match error {
        LeaveError::NotFound { resource, id } => Problem::not_found(resource, id.to_string()),

        LeaveError::AlreadyDecided { status } => {
            Problem::conflict(format!("Request is already {}", status))
        }

        LeaveError::Overlap { start, end } => Problem::conflict(format!(
            "Leave overlaps an existing request ({} - {})",
            start, end
        )),

        LeaveError::Forbidden { message } => Problem::forbidden(message),

        LeaveError::Validation { message } => Problem::validation(message),

        LeaveError::Internal => Problem::internal(),
    }
}
