//! HTTP request handlers - thin layer that delegates to the domain service

use super::{dto::*, error::map_domain_error};
use crate::contract::{CardRequestType, CardStatus, NewCardRequest};
use crate::domain::{CardFilter, Service};
use auth_core::{AuthUser, Role};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use http_problem::Problem;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing card requests
#[derive(Debug, Default, Deserialize)]
pub struct ListCardsQuery {
    /// Employee filter; admin only when different from the caller
    pub nik: Option<String>,
    pub status: Option<String>,
}

/// Submit a card request for the calling employee
pub async fn submit(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Json(req): Json<SubmitCardRequest>,
) -> Result<(StatusCode, Json<CardRequestDto>), Problem> {
    let request_type = CardRequestType::parse(&req.request_type).ok_or_else(|| {
        Problem::validation(format!("unknown request type: {}", req.request_type))
    })?;

    let request = service
        .submit(
            &user.nik,
            NewCardRequest {
                request_type,
                reason: req.reason,
            },
        )
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(request.into())))
}

/// Get one card request; employees may only read their own
pub async fn get_request(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<CardRequestDto>, Problem> {
    let request = service.get(id).await.map_err(map_domain_error)?;
    if request.nik != user.nik {
        user.require_admin()?;
    }
    Ok(Json(request.into()))
}

/// List card requests
pub async fn list_requests(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Query(query): Query<ListCardsQuery>,
) -> Result<Json<CardListResponse>, Problem> {
    let nik = match query.nik {
        Some(nik) if nik != user.nik => {
            user.require_admin()?;
            Some(nik)
        }
        Some(nik) => Some(nik),
        None if user.role == Role::Admin => None,
        None => Some(user.nik.clone()),
    };

    let status = match query.status {
        Some(raw) => Some(
            CardStatus::parse(&raw)
                .ok_or_else(|| Problem::validation(format!("unknown status: {}", raw)))?,
        ),
        None => None,
    };

    let requests = service
        .list(CardFilter { nik, status })
        .await
        .map_err(map_domain_error)?;

    let items: Vec<CardRequestDto> = requests.into_iter().map(|r| r.into()).collect();
    let total = items.len();
    Ok(Json(CardListResponse { items, total }))
}

/// Move a card request along the lifecycle; admin only
pub async fn change_status(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<ChangeCardStatusRequest>,
) -> Result<Json<CardRequestDto>, Problem> {
    user.require_admin()?;

    let to = CardStatus::parse(&req.status)
        .ok_or_else(|| Problem::validation(format!("unknown status: {}", req.status)))?;

    let request = service
        .change_status(id, to, &user.nik)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(request.into()))
}
