//! KTA Cards Module
//!
//! Tracks employee ID card (KTA) requests from submission through print and
//! delivery. A request moves Pending -> Printed -> Delivered, or Pending ->
//! Rejected; Delivered and Rejected are final.

pub mod contract;
pub use contract::{
    error::CardError, CardRequest, CardRequestType, CardStatus, NewCardRequest,
};

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
