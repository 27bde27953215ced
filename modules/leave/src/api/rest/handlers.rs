//! HTTP request handlers - thin layer that delegates to the domain service

use super::{dto::*, error::map_domain_error};
use crate::contract::{Decision, LeaveType, NewLeaveRequest, NewShiftSwap, RequestStatus};
use crate::domain::{RequestFilter, Service};
use auth_core::{AuthUser, Role};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use http_problem::Problem;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing requests
#[derive(Debug, Default, Deserialize)]
pub struct ListRequestsQuery {
    /// Employee filter; admin only when different from the caller
    pub nik: Option<String>,
    pub status: Option<String>,
}

fn build_filter(user: &AuthUser, query: ListRequestsQuery) -> Result<RequestFilter, Problem> {
    let nik = match query.nik {
        Some(nik) if nik != user.nik => {
            user.require_admin()?;
            Some(nik)
        }
        Some(nik) => Some(nik),
        // Admins with no filter see everything, employees see their own
        None if user.role == Role::Admin => None,
        None => Some(user.nik.clone()),
    };

    let status = match query.status {
        Some(raw) => Some(
            RequestStatus::parse(&raw)
                .ok_or_else(|| Problem::validation(format!("unknown status: {}", raw)))?,
        ),
        None => None,
    };

    Ok(RequestFilter { nik, status })
}

fn parse_decision(raw: &str) -> Result<Decision, Problem> {
    match raw {
        "approve" => Ok(Decision::Approve),
        "reject" => Ok(Decision::Reject),
        other => Err(Problem::validation(format!(
            "decision must be \"approve\" or \"reject\", got \"{}\"",
            other
        ))),
    }
}

// ===== Leave Requests =====

/// Submit a leave request for the calling employee
pub async fn submit_leave(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Json(req): Json<SubmitLeaveRequest>,
) -> Result<(StatusCode, Json<LeaveRequestDto>), Problem> {
    let leave_type = LeaveType::parse(&req.leave_type)
        .ok_or_else(|| Problem::validation(format!("unknown leave type: {}", req.leave_type)))?;

    let request = service
        .submit_leave(
            &user.nik,
            NewLeaveRequest {
                leave_type,
                start_date: req.start_date,
                end_date: req.end_date,
                reason: req.reason,
            },
        )
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(request.into())))
}

/// Get one leave request; employees may only read their own
pub async fn get_leave(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<LeaveRequestDto>, Problem> {
    let request = service.get_leave(id).await.map_err(map_domain_error)?;
    if request.nik != user.nik {
        user.require_admin()?;
    }
    Ok(Json(request.into()))
}

/// List leave requests
pub async fn list_leave(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Query(query): Query<ListRequestsQuery>,
) -> Result<Json<LeaveListResponse>, Problem> {
    let filter = build_filter(&user, query)?;
    let requests = service.list_leave(filter).await.map_err(map_domain_error)?;

    let items: Vec<LeaveRequestDto> = requests.into_iter().map(|r| r.into()).collect();
    let total = items.len();
    Ok(Json(LeaveListResponse { items, total }))
}

/// Approve or reject a pending leave request; admin only
pub async fn decide_leave(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<DecisionRequest>,
) -> Result<Json<LeaveRequestDto>, Problem> {
    user.require_admin()?;
    let decision = parse_decision(&req.decision)?;

    let request = service
        .decide_leave(id, decision, &user.nik, req.note)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(request.into()))
}

/// Cancel a pending leave request; requester only
pub async fn cancel_leave(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<LeaveRequestDto>, Problem> {
    let request = service
        .cancel_leave(id, &user.nik)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(request.into()))
}

// ===== Shift Swaps =====

/// Submit a shift swap for the calling employee
pub async fn submit_swap(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Json(req): Json<SubmitShiftSwapRequest>,
) -> Result<(StatusCode, Json<ShiftSwapDto>), Problem> {
    let swap = service
        .submit_swap(
            &user.nik,
            NewShiftSwap {
                counterpart_nik: req.counterpart_nik,
                own_shift_date: req.own_shift_date,
                counterpart_shift_date: req.counterpart_shift_date,
                reason: req.reason,
            },
        )
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(swap.into())))
}

/// Get one shift swap; employees may only read swaps they are part of
pub async fn get_swap(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ShiftSwapDto>, Problem> {
    let swap = service.get_swap(id).await.map_err(map_domain_error)?;
    if swap.requester_nik != user.nik && swap.counterpart_nik != user.nik {
        user.require_admin()?;
    }
    Ok(Json(swap.into()))
}

/// List shift swaps
pub async fn list_swaps(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Query(query): Query<ListRequestsQuery>,
) -> Result<Json<ShiftSwapListResponse>, Problem> {
    let filter = build_filter(&user, query)?;
    let swaps = service.list_swaps(filter).await.map_err(map_domain_error)?;

    let items: Vec<ShiftSwapDto> = swaps.into_iter().map(|s| s.into()).collect();
    let total = items.len();
    Ok(Json(ShiftSwapListResponse { items, total }))
}

/// Approve or reject a pending shift swap; admin only
pub async fn decide_swap(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<DecisionRequest>,
) -> Result<Json<ShiftSwapDto>, Problem> {
    user.require_admin()?;
    let decision = parse_decision(&req.decision)?;

    let swap = service
        .decide_swap(id, decision, &user.nik)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(swap.into()))
}

/// Cancel a pending shift swap; requester only
pub async fn cancel_swap(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ShiftSwapDto>, Problem> {
    let swap = service
        .cancel_swap(id, &user.nik)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(swap.into()))
}
