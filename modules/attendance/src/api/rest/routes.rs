//! Route registration for the attendance REST surface

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Build the attendance router; the server nests it under `/api/attendance`
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/", get(handlers::list_records))
        .route("/check-in", post(handlers::check_in))
        .route("/check-out", post(handlers::check_out))
        .route("/today", get(handlers::today))
        .layer(Extension(service))
}
