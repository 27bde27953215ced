//! Contract error types for the KTA cards module

use super::model::CardStatus;

/// Card domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// Card request not found
    #[error("card request not found: {id}")]
    NotFound { id: i64 },

    /// Transition is not allowed by the lifecycle
    #[error("cannot move card request from {from} to {to}")]
    IllegalTransition { from: CardStatus, to: CardStatus },

    /// An open request already exists for this employee
    #[error("an open card request already exists for {nik}")]
    AlreadyOpen { nik: String },

    /// Input failed validation
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Storage or other unexpected failure
    #[error("internal error")]
    Internal,
}
