//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{LeaveRepository, RequestFilter, ShiftSwapRepository};
pub use service::Service;
