//! Contract layer - transport-agnostic models and errors

pub mod error;
pub mod model;

pub use error::AttendanceError;
pub use model::{AttendanceRecord, AttendanceStatus};
