//! Leave Module
//!
//! Two request workflows share this module: leave requests (cuti) and shift
//! swaps (tukar dinas). Both follow the same decision lifecycle: Pending is
//! the only mutable state; an approval, rejection or cancellation is final.

pub mod contract;
pub use contract::{
    error::LeaveError, Decision, LeaveRequest, LeaveType, NewLeaveRequest, NewShiftSwap,
    RequestStatus, ShiftSwap,
};

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
