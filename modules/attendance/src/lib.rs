//! Attendance Module
//!
//! Daily presence records (presensi): one row per employee per calendar day,
//! opened by check-in and completed by check-out. Lateness is derived from
//! the configured workday start plus a grace period.

pub mod contract;
pub use contract::{error::AttendanceError, AttendanceRecord, AttendanceStatus};

pub mod config;
pub use config::AttendanceConfig;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
