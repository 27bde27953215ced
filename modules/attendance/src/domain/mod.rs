//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{AttendanceRepository, NewAttendanceRecord};
pub use service::Service;
