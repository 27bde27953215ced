//! Contract error types for the payroll module

/// Payroll domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayrollError {
    /// No visible row for the employee and period
    #[error("payroll row not found for {nik} in {period}")]
    NotFound { nik: String, period: String },

    /// Published rows are immutable
    #[error("payroll row for {nik} in {period} is already published")]
    AlreadyPublished { nik: String, period: String },

    /// Input failed validation
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Storage or other unexpected failure
    #[error("internal error")]
    Internal,
}
