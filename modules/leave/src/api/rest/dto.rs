//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Leave request response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaveRequestDto {
    pub id: i64,
    pub nik: String,
    /// "annual", "sick" or "unpaid"
    #[schema(example = "annual")]
    pub leave_type: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: String,
    /// "pending", "approved", "rejected" or "cancelled"
    #[schema(example = "pending")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_note: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Submit leave request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitLeaveRequest {
    /// "annual", "sick" or "unpaid"
    #[schema(example = "annual")]
    pub leave_type: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: String,
}

/// Approve or reject a pending request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DecisionRequest {
    /// "approve" or "reject"
    #[schema(example = "approve")]
    pub decision: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// List of leave requests
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub items: Vec<LeaveRequestDto>,
    pub total: usize,
}

/// Shift swap response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShiftSwapDto {
    pub id: i64,
    pub requester_nik: String,
    pub counterpart_nik: String,
    pub own_shift_date: chrono::NaiveDate,
    pub counterpart_shift_date: chrono::NaiveDate,
    pub reason: String,
    #[schema(example = "pending")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Submit shift swap request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitShiftSwapRequest {
    pub counterpart_nik: String,
    pub own_shift_date: chrono::NaiveDate,
    pub counterpart_shift_date: chrono::NaiveDate,
    pub reason: String,
}

/// List of shift swaps
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShiftSwapListResponse {
    pub items: Vec<ShiftSwapDto>,
    pub total: usize,
}

impl From<crate::contract::LeaveRequest> for LeaveRequestDto {
    fn from(request: crate::contract::LeaveRequest) -> Self {
        Self {
            id: request.id,
            nik: request.nik,
            leave_type: request.leave_type.as_str().to_string(),
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason,
            status: request.status.as_str().to_string(),
            decided_by: request.decided_by,
            decided_at: request.decided_at,
            decision_note: request.decision_note,
            created_at: request.created_at,
        }
    }
}

impl From<crate::contract::ShiftSwap> for ShiftSwapDto {
    fn from(swap: crate::contract::ShiftSwap) -> Self {
        Self {
            id: swap.id,
            requester_nik: swap.requester_nik,
            counterpart_nik: swap.counterpart_nik,
            own_shift_date: swap.own_shift_date,
            counterpart_shift_date: swap.counterpart_shift_date,
            reason: swap.reason,
            status: swap.status.as_str().to_string(),
            decided_by: swap.decided_by,
            decided_at: swap.decided_at,
            created_at: swap.created_at,
        }
    }
}
