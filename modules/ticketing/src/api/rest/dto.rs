//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Ticket response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: Uuid,

    /// Human-facing reference code
    #[schema(example = "TKT-4F09A1C2")]
    pub code: String,

    pub reporter_nik: String,

    pub assignee_nik: Option<String>,

    #[schema(example = "it_support")]
    pub category: String,

    #[schema(example = "medium")]
    pub priority: String,

    pub subject: String,

    pub description: String,

    #[schema(example = "open")]
    pub status: String,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub updated_at: chrono::DateTime<chrono::Utc>,

    pub last_activity_at: chrono::DateTime<chrono::Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Ticket creation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    #[schema(example = "it_support")]
    pub category: String,

    /// One of "low", "medium", "high", "urgent" (defaults to "medium")
    #[serde(default = "default_priority")]
    pub priority: String,

    pub subject: String,

    #[serde(default)]
    pub description: String,
}

fn default_priority() -> String {
    "medium".to_string()
}

/// Status change request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangeStatusRequest {
    /// Target lifecycle state
    #[schema(example = "in_progress")]
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Assignment request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AssignTicketRequest {
    pub assignee_nik: String,
}

/// Assignment response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i64,
    pub ticket_id: Uuid,
    pub assignee_nik: String,
    pub assigned_by: String,
    pub active: bool,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}

/// One status history row
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusChangeDto {
    pub id: i64,
    pub ticket_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_status: Option<String>,
    pub to_status: String,
    pub changed_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub changed_at: chrono::DateTime<chrono::Utc>,
}

/// Paginated list of tickets
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TicketListResponse {
    pub items: Vec<TicketDto>,
    pub total: u64,
}

/// Status history of one ticket
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub items: Vec<StatusChangeDto>,
}

/// Result of an auto-close batch run
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AutoCloseResponse {
    /// Number of tickets moved to closed
    pub closed: usize,
}
