//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::AttendanceError;
use http_problem::Problem;

/// Map attendance domain errors to HTTP Problem Details
pub fn map_domain_error(error: AttendanceError) -> Problem {
    match error {
        AttendanceError::AlreadyCheckedIn { date } => {
            Problem::conflict(format!("Already checked in on {}", date))
        }

        AttendanceError::NotCheckedIn { date } => {
            Problem::conflict(format!("No open check-in on {}", date))
        }

        AttendanceError::AlreadyCheckedOut { date } => {
            Problem::conflict(format!("Already checked out on {}", date))
        }

        AttendanceError::NotFound { nik, date } => {
            Problem::not_found("Attendance record", format!("{}/{}", nik, date))
        }

        AttendanceError::Validation { message } => Problem::validation(message),

        AttendanceError::Internal => Problem::internal(),
    }
}
