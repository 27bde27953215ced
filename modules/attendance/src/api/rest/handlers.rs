//! HTTP request handlers - thin layer that delegates to the domain service

use super::{dto::*, error::map_domain_error};
use crate::domain::Service;
use auth_core::AuthUser;
use axum::{
    extract::Query,
    http::StatusCode,
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use http_problem::Problem;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing attendance records
#[derive(Debug, Deserialize)]
pub struct ListAttendanceQuery {
    /// Employee to list; admin only when different from the caller
    pub nik: Option<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Open today's record for the calling employee
pub async fn check_in(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Json(req): Json<CheckInRequest>,
) -> Result<(StatusCode, Json<AttendanceRecordDto>), Problem> {
    let record = service
        .check_in(&user.nik, Utc::now(), req.note)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Stamp today's check-out for the calling employee
pub async fn check_out(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
) -> Result<Json<AttendanceRecordDto>, Problem> {
    let record = service
        .check_out(&user.nik, Utc::now())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(record.into()))
}

/// List records; employees see only their own rows
pub async fn list_records(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Query(query): Query<ListAttendanceQuery>,
) -> Result<Json<AttendanceListResponse>, Problem> {
    let nik = match query.nik {
        Some(nik) if nik != user.nik => {
            user.require_admin()?;
            nik
        }
        Some(nik) => nik,
        None => user.nik.clone(),
    };

    let records = service
        .list_for_employee(&nik, query.from, query.to)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<AttendanceRecordDto> = records.into_iter().map(|r| r.into()).collect();
    let total = items.len();
    Ok(Json(AttendanceListResponse { items, total }))
}

/// Today's record for the calling employee
pub async fn today(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
) -> Result<Json<AttendanceRecordDto>, Problem> {
    let record = service
        .today(&user.nik, Utc::now().date_naive())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(record.into()))
}
