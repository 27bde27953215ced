//! Contract error types for the attendance module

use chrono::NaiveDate;

/// Attendance domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttendanceError {
    /// A record for this employee and date already has a check-in
    #[error("already checked in on {date}")]
    AlreadyCheckedIn { date: NaiveDate },

    /// Check-out without an open check-in
    #[error("no open check-in on {date}")]
    NotCheckedIn { date: NaiveDate },

    /// Check-out already stamped
    #[error("already checked out on {date}")]
    AlreadyCheckedOut { date: NaiveDate },

    /// No record for this employee and date
    #[error("no attendance record for {nik} on {date}")]
    NotFound { nik: String, date: NaiveDate },

    /// Input failed validation
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Storage or other unexpected failure
    #[error("internal error")]
    Internal,
}
