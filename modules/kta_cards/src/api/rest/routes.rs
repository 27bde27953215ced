//! Route registration for the KTA cards REST surface

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Build the KTA cards router; the server nests it under `/api/kta`
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/", post(handlers::submit).get(handlers::list_requests))
        .route("/{id}", get(handlers::get_request))
        .route("/{id}/status", put(handlers::change_status))
        .layer(Extension(service))
}
