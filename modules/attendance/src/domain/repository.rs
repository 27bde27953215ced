//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{AttendanceRecord, AttendanceStatus};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

/// New attendance row, id assigned by the repository
#[derive(Debug, Clone)]
pub struct NewAttendanceRecord {
    pub nik: String,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    pub status: AttendanceStatus,
    pub note: Option<String>,
}

/// Repository for attendance records
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Insert a new record (one per employee per date)
    async fn insert(&self, record: &NewAttendanceRecord) -> Result<AttendanceRecord>;

    /// The record for an employee on a date, if any
    async fn find_by_nik_and_date(
        &self,
        nik: &str,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>>;

    /// Persist changes to an existing record
    async fn update(&self, record: &AttendanceRecord) -> Result<AttendanceRecord>;

    /// Records for an employee between two dates inclusive, oldest first
    async fn list_range(
        &self,
        nik: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>>;
}
