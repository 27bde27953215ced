//! Route registration for the leave REST surface

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Build the leave-request router; the server nests it under `/api/leave`
pub fn leave_router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/", post(handlers::submit_leave).get(handlers::list_leave))
        .route("/{id}", get(handlers::get_leave))
        .route("/{id}/decision", put(handlers::decide_leave))
        .route("/{id}/cancel", post(handlers::cancel_leave))
        .layer(Extension(service))
}

/// Build the shift-swap router; the server nests it under `/api/shift-swaps`
pub fn shift_swap_router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/", post(handlers::submit_swap).get(handlers::list_swaps))
        .route("/{id}", get(handlers::get_swap))
        .route("/{id}/decision", put(handlers::decide_swap))
        .route("/{id}/cancel", post(handlers::cancel_swap))
        .layer(Extension(service))
}
