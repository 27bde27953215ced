//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::PayrollRepository;
pub use service::Service;
