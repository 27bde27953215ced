//! HTTP request handlers - thin layer that delegates to the domain service

use super::{dto::*, error::map_domain_error};
use crate::contract::{PayrollInput, Period};
use crate::domain::Service;
use auth_core::AuthUser;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use http_problem::Problem;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing a payroll period
#[derive(Debug, Deserialize)]
pub struct ListPayrollQuery {
    /// "YYYY-MM"
    pub period: String,
}

fn parse_period(raw: &str) -> Result<Period, Problem> {
    Period::parse(raw)
        .ok_or_else(|| Problem::validation(format!("period must be \"YYYY-MM\", got \"{}\"", raw)))
}

/// Create or overwrite a payroll row; admin only
pub async fn upsert(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Json(req): Json<UpsertPayrollRequest>,
) -> Result<(StatusCode, Json<PayrollRowDto>), Problem> {
    user.require_admin()?;
    let period = parse_period(&req.period)?;

    let row = service
        .upsert(
            &req.nik,
            &period,
            PayrollInput {
                base_salary: req.base_salary,
                allowances: req.allowances,
                deductions: req.deductions,
            },
        )
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::OK, Json(row.into())))
}

/// All rows of a period; admin only
pub async fn list_period(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Query(query): Query<ListPayrollQuery>,
) -> Result<Json<PayrollListResponse>, Problem> {
    user.require_admin()?;
    let period = parse_period(&query.period)?;

    let rows = service
        .list_period(&period)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<PayrollRowDto> = rows.into_iter().map(|r| r.into()).collect();
    let total = items.len();
    Ok(Json(PayrollListResponse { items, total }))
}

/// Publish every row of a period; admin only
pub async fn publish_period(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Json(req): Json<PublishPeriodRequest>,
) -> Result<Json<PublishPeriodResponse>, Problem> {
    user.require_admin()?;
    let period = parse_period(&req.period)?;

    let published = service
        .publish_period(&period)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(PublishPeriodResponse {
        period: period.to_string(),
        published,
    }))
}

/// The calling employee's slip; 404 until the period is published
pub async fn my_slip(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(period): Path<String>,
) -> Result<Json<PayrollRowDto>, Problem> {
    let period = parse_period(&period)?;

    let row = service
        .slip(&user.nik, &period)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(row.into()))
}

/// One employee's row, published or not; admin only
pub async fn get_row(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path((nik, period)): Path<(String, String)>,
) -> Result<Json<PayrollRowDto>, Problem> {
    user.require_admin()?;
    let period = parse_period(&period)?;

    let row = service.row(&nik, &period).await.map_err(map_domain_error)?;

    Ok(Json(row.into()))
}
