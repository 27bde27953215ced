//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Attendance record response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendanceRecordDto {
    pub id: i64,
    pub nik: String,
    pub date: chrono::NaiveDate,
    pub check_in: chrono::NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<chrono::NaiveTime>,
    /// "on_time" or "late"
    #[schema(example = "on_time")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Check-in request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CheckInRequest {
    #[serde(default)]
    pub note: Option<String>,
}

/// List of attendance records
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub items: Vec<AttendanceRecordDto>,
    pub total: usize,
}

impl From<crate::contract::AttendanceRecord> for AttendanceRecordDto {
    fn from(record: crate::contract::AttendanceRecord) -> Self {
        Self {
            id: record.id,
            nik: record.nik,
            date: record.date,
            check_in: record.check_in,
            check_out: record.check_out,
            status: record.status.as_str().to_string(),
            note: record.note,
        }
    }
}
