//! Contract error types for the ticketing module

use super::model::TicketStatus;
use uuid::Uuid;

/// Ticketing domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    /// Ticket not found
    #[error("ticket not found: {id}")]
    NotFound { id: Uuid },

    /// Requested status change is not allowed by the lifecycle graph
    #[error("illegal status transition: {from} -> {to}")]
    InvalidTransition {
        from: TicketStatus,
        to: TicketStatus,
    },

    /// Input failed validation
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Storage or other unexpected failure
    #[error("internal error")]
    Internal,
}
