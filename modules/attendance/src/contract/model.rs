//! Contract models for the attendance module

use chrono::{NaiveDate, NaiveTime};

/// Whether the employee arrived before or after the grace window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    OnTime,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::OnTime => "on_time",
            AttendanceStatus::Late => "late",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "on_time" => Some(AttendanceStatus::OnTime),
            "late" => Some(AttendanceStatus::Late),
            _ => None,
        }
    }
}

/// One day of presence for one employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub nik: String,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub note: Option<String>,
}
