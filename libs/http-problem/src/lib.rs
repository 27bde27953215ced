//! HTTP error mapping to RFC-9457 Problem Details
//!
//! Every REST surface in the workspace answers failures with the same
//! `application/problem+json` body. Modules map their domain errors onto
//! [`Problem`] in their own `api/rest/error.rs`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// 404 with a uniform title/detail shape
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{} Not Found", resource))
            .with_detail(format!("{} with id '{}' was not found", resource, id))
    }

    /// 409 with a reason in the detail
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, "Conflict").with_detail(reason)
    }

    /// 400 validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
    }

    /// 401 missing or bad credentials
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized").with_detail(detail)
    }

    /// 403 authenticated but not allowed
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden").with_detail(detail)
    }

    /// 500 with the detail withheld from the client
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .with_detail("An unexpected error occurred")
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Helper to convert anyhow errors to Problem Details
pub fn map_anyhow_error(error: anyhow::Error) -> Problem {
    tracing::error!("Internal error: {:?}", error);
    Problem::internal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_resource_and_id() {
        let p = Problem::not_found("Ticket", "abc");
        assert_eq!(p.status, 404);
        assert_eq!(p.title, "Ticket Not Found");
        assert!(p.detail.as_deref().is_some_and(|d| d.contains("abc")));
    }

    #[test]
    fn serializes_type_field_name() {
        let p = Problem::conflict("already checked in");
        let json = serde_json::to_value(&p).ok();
        let json = match json {
            Some(v) => v,
            None => panic!("problem must serialize"),
        };
        assert_eq!(json["type"], "https://httpstatuses.io/409");
        assert_eq!(json["status"], 409);
        assert!(json.get("instance").is_none());
    }
}
