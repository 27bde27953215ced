//! Route registration for the payroll REST surface

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Build the payroll router; the server nests it under `/api/payroll`
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/", put(handlers::upsert).get(handlers::list_period))
        .route("/publish", post(handlers::publish_period))
        .route("/me/{period}", get(handlers::my_slip))
        .route("/{nik}/{period}", get(handlers::get_row))
        .layer(Extension(service))
}
