//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{LeaveRequest, NewLeaveRequest, NewShiftSwap, RequestStatus, ShiftSwap};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Filters for listing requests
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    pub nik: Option<String>,
    pub status: Option<RequestStatus>,
}

/// Repository for leave requests
#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// Insert a Pending request for an employee
    async fn insert(&self, nik: &str, request: &NewLeaveRequest) -> Result<LeaveRequest>;

    /// Find a request by id
    async fn find_by_id(&self, id: i64) -> Result<Option<LeaveRequest>>;

    /// List requests matching the filter, newest first
    async fn list(&self, filter: &RequestFilter) -> Result<Vec<LeaveRequest>>;

    /// Persist changes to an existing request
    async fn update(&self, request: &LeaveRequest) -> Result<LeaveRequest>;

    /// Pending/Approved requests of an employee intersecting [start, end]
    async fn find_overlapping(
        &self,
        nik: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaveRequest>>;
}

/// Repository for shift swaps
#[async_trait]
pub trait ShiftSwapRepository: Send + Sync {
    /// Insert a Pending swap for a requester
    async fn insert(&self, requester_nik: &str, swap: &NewShiftSwap) -> Result<ShiftSwap>;

    /// Find a swap by id
    async fn find_by_id(&self, id: i64) -> Result<Option<ShiftSwap>>;

    /// List swaps matching the filter (nik matches either side), newest first
    async fn list(&self, filter: &RequestFilter) -> Result<Vec<ShiftSwap>>;

    /// Persist changes to an existing swap
    async fn update(&self, swap: &ShiftSwap) -> Result<ShiftSwap>;
}
