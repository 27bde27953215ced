//! Router assembly and the internal cron endpoint

use auth_core::TokenVerifier;
use axum::{
    http::HeaderMap,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use http_problem::Problem;
use serde::Serialize;
use std::sync::Arc;
use ticketing::api::rest::dto::AutoCloseResponse;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Shared secret expected in the `x-cron-secret` header
#[derive(Clone)]
pub struct CronSecret(pub Arc<String>);

/// Every domain service the router needs
pub struct Services {
    pub tickets: Arc<ticketing::domain::Service>,
    pub attendance: Arc<attendance::domain::Service>,
    pub leave: Arc<leave::domain::Service>,
    pub cards: Arc<kta_cards::domain::Service>,
    pub payroll: Arc<payroll::domain::Service>,
}

/// Assemble the full application router
pub fn build_router(
    services: &Services,
    verifier: Arc<TokenVerifier>,
    cron_secret: CronSecret,
) -> Router {
    let internal = Router::new()
        .route("/tickets/auto-close", post(auto_close_tickets))
        .layer(Extension(services.tickets.clone()))
        .layer(Extension(cron_secret));

    Router::new()
        .route("/healthz", get(healthz))
        .nest(
            "/api/tickets",
            ticketing::api::rest::routes::router(services.tickets.clone()),
        )
        .nest(
            "/api/attendance",
            attendance::api::rest::routes::router(services.attendance.clone()),
        )
        .nest(
            "/api/leave",
            leave::api::rest::routes::leave_router(services.leave.clone()),
        )
        .nest(
            "/api/shift-swaps",
            leave::api::rest::routes::shift_swap_router(services.leave.clone()),
        )
        .nest(
            "/api/kta",
            kta_cards::api::rest::routes::router(services.cards.clone()),
        )
        .nest(
            "/api/payroll",
            payroll::api::rest::routes::router(services.payroll.clone()),
        )
        .nest("/internal", internal)
        .layer(Extension(verifier))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Cron-triggered sweep over stale Resolved tickets
async fn auto_close_tickets(
    Extension(secret): Extension<CronSecret>,
    Extension(tickets): Extension<Arc<ticketing::domain::Service>>,
    headers: HeaderMap,
) -> Result<Json<AutoCloseResponse>, Problem> {
    let provided = headers.get("x-cron-secret").and_then(|v| v.to_str().ok());
    if provided != Some(secret.0.as_str()) {
        return Err(Problem::unauthorized("missing or invalid cron secret"));
    }

    let closed = tickets
        .auto_close_stale(Utc::now())
        .await
        .map_err(|e| {
            tracing::error!("auto-close sweep failed: {}", e);
            Problem::internal()
        })?;

    tracing::info!(closed, "auto-close sweep finished");
    Ok(Json(AutoCloseResponse { closed }))
}
