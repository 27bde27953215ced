//! HTTP request handlers - thin layer that delegates to the domain service

use super::{
    dto::*,
    error::map_domain_error,
};
use crate::contract::{NewTicket, Priority, TicketFilter, TicketStatus};
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
use uuid::Uuid;

/// Query parameters for listing tickets
#[derive(Debug, Deserialize)]
pub struct ListTicketsQuery {
    /// Filter by lifecycle state
    pub status: Option<String>,
    /// Filter by assignee NIK
    pub assignee_nik: Option<String>,
    /// Filter by reporter NIK
    pub reporter_nik: Option<String>,
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: u64,
}

/// Create a ticket; the reporter is taken from the bearer token
pub async fn create_ticket(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Json(req): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<TicketDto>), Problem> {
    let priority = Priority::parse(&req.priority)
        .ok_or_else(|| Problem::validation(format!("unknown priority '{}'", req.priority)))?;

    let ticket = service
        .create_ticket(
            &user.nik,
            NewTicket {
                category: req.category,
                priority,
                subject: req.subject,
                description: req.description,
            },
        )
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(ticket.into())))
}

/// List tickets with optional filters
pub async fn list_tickets(
    Extension(service): Extension<Arc<Service>>,
    _user: AuthUser,
    Query(query): Query<ListTicketsQuery>,
) -> Result<Json<TicketListResponse>, Problem> {
    let status = query
        .status
        .as_deref()
        .map(|s| {
            TicketStatus::parse(s)
                .ok_or_else(|| Problem::validation(format!("unknown status '{}'", s)))
        })
        .transpose()?;

    let filter = TicketFilter {
        status,
        assignee_nik: query.assignee_nik,
        reporter_nik: query.reporter_nik,
    };

    let (tickets, total) = service
        .list_tickets(filter, query.limit, query.offset)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<TicketDto> = tickets.into_iter().map(|t| t.into()).collect();
    Ok(Json(TicketListResponse { items, total }))
}

/// Get a specific ticket
pub async fn get_ticket(
    Extension(service): Extension<Arc<Service>>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TicketDto>, Problem> {
    let ticket = service.get_ticket(id).await.map_err(map_domain_error)?;
    Ok(Json(ticket.into()))
}

/// Get the status history of a ticket
pub async fn get_ticket_history(
    Extension(service): Extension<Arc<Service>>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, Problem> {
    let history = service.ticket_history(id).await.map_err(map_domain_error)?;
    let items: Vec<StatusChangeDto> = history.into_iter().map(|h| h.into()).collect();
    Ok(Json(HistoryResponse { items }))
}

/// Move a ticket to a new lifecycle state
pub async fn change_status(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeStatusRequest>,
) -> Result<Json<TicketDto>, Problem> {
    let to = TicketStatus::parse(&req.status)
        .ok_or_else(|| Problem::validation(format!("unknown status '{}'", req.status)))?;

    let ticket = service
        .change_status(id, to, &user.nik, req.note)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ticket.into()))
}

/// Assign a ticket; only admins hand tickets out
pub async fn assign_ticket(
    Extension(service): Extension<Arc<Service>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignTicketRequest>,
) -> Result<Json<AssignmentDto>, Problem> {
    user.require_admin()?;

    let assignment = service
        .assign_ticket(id, &req.assignee_nik, &user.nik)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(assignment.into()))
}
