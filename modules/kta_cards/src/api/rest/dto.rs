//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Card request response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CardRequestDto {
    pub id: i64,
    pub nik: String,
    /// "new" or "replacement"
    #[schema(example = "replacement")]
    pub request_type: String,
    pub reason: String,
    /// "pending", "printed", "delivered" or "rejected"
    #[schema(example = "pending")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_by: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Submit card request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitCardRequest {
    /// "new" or "replacement"
    #[schema(example = "replacement")]
    pub request_type: String,
    pub reason: String,
}

/// Change card request status
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangeCardStatusRequest {
    /// Target status
    #[schema(example = "printed")]
    pub status: String,
}

/// List of card requests
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CardListResponse {
    pub items: Vec<CardRequestDto>,
    pub total: usize,
}

impl From<crate::contract::CardRequest> for CardRequestDto {
    fn from(request: crate::contract::CardRequest) -> Self {
        Self {
            id: request.id,
            nik: request.nik,
            request_type: request.request_type.as_str().to_string(),
            reason: request.reason,
            status: request.status.as_str().to_string(),
            processed_by: request.processed_by,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}
