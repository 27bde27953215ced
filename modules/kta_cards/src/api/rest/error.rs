//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::CardError;
use http_problem::Problem;

/// Map card domain errors to HTTP Problem Details
pub fn map_domain_error(error: CardError) -> Problem {
    match error {
        CardError::NotFound { id } => Problem::not_found("Card request", id.to_string()),

        CardError::IllegalTransition { from, to } => {
            Problem::conflict(format!("Cannot move card request from {} to {}", from, to))
        }

        CardError::AlreadyOpen { nik } => {
            Problem::conflict(format!("An open card request already exists for {}", nik))
        }

        CardError::Validation { message } => Problem::validation(message),

        CardError::Internal => Problem::internal(),
    }
}
