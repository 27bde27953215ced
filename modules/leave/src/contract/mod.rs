//! Contract layer - transport-agnostic models and errors

pub mod error;
pub mod model;

pub use error::LeaveError;
pub use model::{
    Decision, LeaveRequest, LeaveType, NewLeaveRequest, NewShiftSwap, RequestStatus, ShiftSwap,
};
