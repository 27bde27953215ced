//! Contract layer - transport-agnostic models and errors

pub mod error;
pub mod model;

pub use error::PayrollError;
pub use model::{PayrollInput, PayrollRow, Period};
