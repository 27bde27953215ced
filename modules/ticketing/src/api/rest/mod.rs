//! REST API - DTOs, handlers and route registration

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
