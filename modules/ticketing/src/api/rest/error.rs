//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::TicketError;
use http_problem::Problem;

/// Map ticketing domain errors to HTTP Problem Details
pub fn map_domain_error(error: TicketError) -> Problem {
    match error {
        TicketError::NotFound { id } => Problem::not_found("Ticket", id),

        TicketError::InvalidTransition { from, to } => Problem::conflict(format!(
            "Cannot move ticket from '{}' to '{}'",
            from, to
        )),

        TicketError::Validation { message } => Problem::validation(message),

        TicketError::Internal => Problem::internal(),
    }
}
