//! Route registration for the ticketing REST surface

use crate::domain::Service;
use super::handlers;
use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Build the ticketing router; the server nests it under `/api/tickets`
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/", post(handlers::create_ticket).get(handlers::list_tickets))
        .route("/{id}", get(handlers::get_ticket))
        .route("/{id}/history", get(handlers::get_ticket_history))
        .route("/{id}/status", put(handlers::change_status))
        .route("/{id}/assignee", put(handlers::assign_ticket))
        .layer(Extension(service))
}
