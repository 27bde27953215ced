//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{AssignmentRepository, HistoryRepository, NewAssignment, NewStatusChange, TicketRepository};
pub use service::Service;
