//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{CardRepository, CardFilter};
pub use service::Service;
