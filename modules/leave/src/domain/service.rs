//! Domain service - request workflows for leave and shift swaps

use super::repository::{LeaveRepository, RequestFilter, ShiftSwapRepository};
use crate::contract::{
    Decision, LeaveError, LeaveRequest, NewLeaveRequest, NewShiftSwap, RequestStatus, ShiftSwap,
};
use chrono::Utc;
use std::sync::Arc;

/// Domain service for leave and shift-swap requests
pub struct Service {
    leaves: Arc<dyn LeaveRepository>,
    swaps: Arc<dyn ShiftSwapRepository>,
}

impl Service {
    pub fn new(leaves: Arc<dyn LeaveRepository>, swaps: Arc<dyn ShiftSwapRepository>) -> Self {
        Self { leaves, swaps }
    }

    // ===== Leave Requests =====

    /// Submit a leave request for an employee
    pub async fn submit_leave(
        &self,
        nik: &str,
        input: NewLeaveRequest,
    ) -> Result<LeaveRequest, LeaveError> {
        if input.start_date > input.end_date {
            return Err(LeaveError::Validation {
                message: "start_date must not be after end_date".to_string(),
            });
        }
        if input.reason.trim().is_empty() {
            return Err(LeaveError::Validation {
                message: "reason must not be empty".to_string(),
            });
        }

        let overlapping = self
            .leaves
            .find_overlapping(nik, input.start_date, input.end_date)
            .await
            .map_err(|e| internal("find overlapping leave", e))?;
        if let Some(existing) = overlapping.first() {
            return Err(LeaveError::Overlap {
                start: existing.start_date,
                end: existing.end_date,
            });
        }

        let request = self
            .leaves
            .insert(nik, &input)
            .await
            .map_err(|e| internal("insert leave request", e))?;

        tracing::info!(nik, id = request.id, "leave request submitted");
        Ok(request)
    }

    /// Get one leave request
    pub async fn get_leave(&self, id: i64) -> Result<LeaveRequest, LeaveError> {
        self.leaves
            .find_by_id(id)
            .await
            .map_err(|e| internal("find leave request", e))?
            .ok_or(LeaveError::NotFound {
                resource: "leave request",
                id,
            })
    }

    /// List leave requests
    pub async fn list_leave(&self, filter: RequestFilter) -> Result<Vec<LeaveRequest>, LeaveError> {
        self.leaves
            .list(&filter)
            .await
            .map_err(|e| internal("list leave requests", e))
    }

    /// Approve or reject a pending leave request
    pub async fn decide_leave(
        &self,
        id: i64,
        decision: Decision,
        decided_by: &str,
        note: Option<String>,
    ) -> Result<LeaveRequest, LeaveError> {
        let mut request = self.get_leave(id).await?;
        ensure_pending(request.status)?;

        request.status = decision.resulting_status();
        request.decided_by = Some(decided_by.to_string());
        request.decided_at = Some(Utc::now());
        request.decision_note = note;

        self.leaves
            .update(&request)
            .await
            .map_err(|e| internal("update leave request", e))
    }

    /// Cancel a pending leave request; owners only
    pub async fn cancel_leave(&self, id: i64, by_nik: &str) -> Result<LeaveRequest, LeaveError> {
        let mut request = self.get_leave(id).await?;

        if request.nik != by_nik {
            return Err(LeaveError::Forbidden {
                message: "only the requester may cancel".to_string(),
            });
        }
        ensure_pending(request.status)?;

        request.status = RequestStatus::Cancelled;
        self.leaves
            .update(&request)
            .await
            .map_err(|e| internal("update leave request", e))
    }

    // ===== Shift Swaps =====

    /// Submit a shift swap for a requester
    pub async fn submit_swap(
        &self,
        requester_nik: &str,
        input: NewShiftSwap,
    ) -> Result<ShiftSwap, LeaveError> {
        if input.counterpart_nik == requester_nik {
            return Err(LeaveError::Validation {
                message: "cannot swap a shift with yourself".to_string(),
            });
        }
        if input.counterpart_nik.trim().is_empty() {
            return Err(LeaveError::Validation {
                message: "counterpart_nik must not be empty".to_string(),
            });
        }

        let swap = self
            .swaps
            .insert(requester_nik, &input)
            .await
            .map_err(|e| internal("insert shift swap", e))?;

        tracing::info!(requester_nik, id = swap.id, "shift swap submitted");
        Ok(swap)
    }

    /// Get one shift swap
    pub async fn get_swap(&self, id: i64) -> Result<ShiftSwap, LeaveError> {
        self.swaps
            .find_by_id(id)
            .await
            .map_err(|e| internal("find shift swap", e))?
            .ok_or(LeaveError::NotFound {
                resource: "shift swap",
                id,
            })
    }

    /// List shift swaps
    pub async fn list_swaps(&self, filter: RequestFilter) -> Result<Vec<ShiftSwap>, LeaveError> {
        self.swaps
            .list(&filter)
            .await
            .map_err(|e| internal("list shift swaps", e))
    }

    /// Approve or reject a pending shift swap
    pub async fn decide_swap(
        &self,
        id: i64,
        decision: Decision,
        decided_by: &str,
    ) -> Result<ShiftSwap, LeaveError> {
        let mut swap = self.get_swap(id).await?;
        ensure_pending(swap.status)?;

        swap.status = decision.resulting_status();
        swap.decided_by = Some(decided_by.to_string());
        swap.decided_at = Some(Utc::now());

        self.swaps
            .update(&swap)
            .await
            .map_err(|e| internal("update shift swap", e))
    }

    /// Cancel a pending shift swap; requester only
    pub async fn cancel_swap(&self, id: i64, by_nik: &str) -> Result<ShiftSwap, LeaveError> {
        let mut swap = self.get_swap(id).await?;

        if swap.requester_nik != by_nik {
            return Err(LeaveError::Forbidden {
                message: "only the requester may cancel".to_string(),
            });
        }
        ensure_pending(swap.status)?;

        swap.status = RequestStatus::Cancelled;
        self.swaps
            .update(&swap)
            .await
            .map_err(|e| internal("update shift swap", e))
    }
}

fn ensure_pending(status: RequestStatus) -> Result<(), LeaveError> {
    if status == RequestStatus::Pending {
        Ok(())
    } else {
        Err(LeaveError::AlreadyDecided { status })
    }
}

fn internal(context: &str, error: anyhow::Error) -> LeaveError {
    tracing::error!("{}: {:?}", context, error);
    LeaveError::Internal
}
