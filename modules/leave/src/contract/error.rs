//! Contract error types for the leave module

use super::model::RequestStatus;
use chrono::NaiveDate;

/// Leave domain errors, shared by both request kinds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeaveError {
    /// Request not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i64 },

    /// Request is no longer Pending
    #[error("request already {status}")]
    AlreadyDecided { status: RequestStatus },

    /// New leave overlaps an existing pending/approved request
    #[error("leave overlaps an existing request ({start} - {end})")]
    Overlap { start: NaiveDate, end: NaiveDate },

    /// Caller may not act on this request
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    /// Input failed validation
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Storage or other unexpected failure
    #[error("internal error")]
    Internal,
}
