//! Integration tests for the leave domain service

use chrono::NaiveDate;
use leave::domain::{LeaveRepository, RequestFilter, Service, ShiftSwapRepository};
use leave::{
    Decision, LeaveError, LeaveRequest, LeaveType, NewLeaveRequest, NewShiftSwap, RequestStatus,
    ShiftSwap,
};
use std::sync::Arc;

pub mod mocks {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::RwLock;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    pub struct MockLeaveRepo {
        data: Arc<RwLock<HashMap<i64, LeaveRequest>>>,
        next_id: Arc<RwLock<i64>>,
    }

    impl MockLeaveRepo {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl LeaveRepository for MockLeaveRepo {
        async fn insert(&self, nik: &str, request: &NewLeaveRequest) -> Result<LeaveRequest> {
            let mut next = self.next_id.write();
            *next += 1;
            let row = LeaveRequest {
                id: *next,
                nik: nik.to_string(),
                leave_type: request.leave_type,
                start_date: request.start_date,
                end_date: request.end_date,
                reason: request.reason.clone(),
                status: RequestStatus::Pending,
                decided_by: None,
                decided_at: None,
                decision_note: None,
                created_at: Utc::now(),
            };
            self.data.write().insert(row.id, row.clone());
            Ok(row)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<LeaveRequest>> {
            Ok(self.data.read().get(&id).cloned())
        }

        async fn list(&self, filter: &RequestFilter) -> Result<Vec<LeaveRequest>> {
            let mut items: Vec<LeaveRequest> = self
                .data
                .read()
                .values()
                .filter(|r| filter.nik.as_ref().is_none_or(|nik| &r.nik == nik))
                .filter(|r| filter.status.is_none_or(|status| r.status == status))
                .cloned()
                .collect();
            items.sort_by_key(|r| std::cmp::Reverse(r.id));
            Ok(items)
        }

        async fn update(&self, request: &LeaveRequest) -> Result<LeaveRequest> {
            self.data.write().insert(request.id, request.clone());
            Ok(request.clone())
        }

        async fn find_overlapping(
            &self,
            nik: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<LeaveRequest>> {
            Ok(self
                .data
                .read()
                .values()
                .filter(|r| {
                    r.nik == nik
                        && matches!(
                            r.status,
                            RequestStatus::Pending | RequestStatus::Approved
                        )
                        && r.start_date <= end
                        && r.end_date >= start
                })
                .cloned()
                .collect())
        }
    }

    #[derive(Clone, Default)]
    pub struct MockShiftSwapRepo {
        data: Arc<RwLock<HashMap<i64, ShiftSwap>>>,
        next_id: Arc<RwLock<i64>>,
    }

    impl MockShiftSwapRepo {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl ShiftSwapRepository for MockShiftSwapRepo {
        async fn insert(&self, requester_nik: &str, swap: &NewShiftSwap) -> Result<ShiftSwap> {
            let mut next = self.next_id.write();
            *next += 1;
            let row = ShiftSwap {
                id: *next,
                requester_nik: requester_nik.to_string(),
                counterpart_nik: swap.counterpart_nik.clone(),
                own_shift_date: swap.own_shift_date,
                counterpart_shift_date: swap.counterpart_shift_date,
                reason: swap.reason.clone(),
                status: RequestStatus::Pending,
                decided_by: None,
                decided_at: None,
                created_at: Utc::now(),
            };
            self.data.write().insert(row.id, row.clone());
            Ok(row)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<ShiftSwap>> {
            Ok(self.data.read().get(&id).cloned())
        }

        async fn list(&self, filter: &RequestFilter) -> Result<Vec<ShiftSwap>> {
            let mut items: Vec<ShiftSwap> = self
                .data
                .read()
                .values()
                .filter(|s| {
                    filter
                        .nik
                        .as_ref()
                        .is_none_or(|nik| &s.requester_nik == nik || &s.counterpart_nik == nik)
                })
                .filter(|s| filter.status.is_none_or(|status| s.status == status))
                .cloned()
                .collect();
            items.sort_by_key(|s| std::cmp::Reverse(s.id));
            Ok(items)
        }

        async fn update(&self, swap: &ShiftSwap) -> Result<ShiftSwap> {
            self.data.write().insert(swap.id, swap.clone());
            Ok(swap.clone())
        }
    }
}

use mocks::{MockLeaveRepo, MockShiftSwapRepo};

fn service() -> Service {
    Service::new(
        Arc::new(MockLeaveRepo::new()),
        Arc::new(MockShiftSwapRepo::new()),
    )
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn annual(start: &str, end: &str) -> NewLeaveRequest {
    NewLeaveRequest {
        leave_type: LeaveType::Annual,
        start_date: date(start),
        end_date: date(end),
        reason: "family trip".to_string(),
    }
}

fn swap(counterpart: &str) -> NewShiftSwap {
    NewShiftSwap {
        counterpart_nik: counterpart.to_string(),
        own_shift_date: date("2025-04-07"),
        counterpart_shift_date: date("2025-04-09"),
        reason: "doctor appointment".to_string(),
    }
}

#[tokio::test]
async fn submitted_leave_starts_pending() {
    let svc = service();

    let request = svc
        .submit_leave("1001", annual("2025-04-01", "2025-04-03"))
        .await
        .unwrap();
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.nik, "1001");
    assert!(request.decided_by.is_none());
}

#[tokio::test]
async fn leave_with_inverted_dates_is_rejected() {
    let svc = service();

    let err = svc
        .submit_leave("1001", annual("2025-04-05", "2025-04-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, LeaveError::Validation { .. }));
}

#[tokio::test]
async fn overlapping_leave_conflicts() {
    let svc = service();

    svc.submit_leave("1001", annual("2025-04-01", "2025-04-05"))
        .await
        .unwrap();

    // Same employee, intersecting range
    let err = svc
        .submit_leave("1001", annual("2025-04-04", "2025-04-08"))
        .await
        .unwrap_err();
    assert!(matches!(err, LeaveError::Overlap { .. }));

    // Different employee is fine
    svc.submit_leave("1002", annual("2025-04-04", "2025-04-08"))
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_leave_does_not_block_new_requests() {
    let svc = service();

    let request = svc
        .submit_leave("1001", annual("2025-04-01", "2025-04-05"))
        .await
        .unwrap();
    svc.decide_leave(request.id, Decision::Reject, "admin", None)
        .await
        .unwrap();

    svc.submit_leave("1001", annual("2025-04-01", "2025-04-05"))
        .await
        .unwrap();
}

#[tokio::test]
async fn leave_is_decided_exactly_once() {
    let svc = service();

    let request = svc
        .submit_leave("1001", annual("2025-04-01", "2025-04-03"))
        .await
        .unwrap();

    let decided = svc
        .decide_leave(
            request.id,
            Decision::Approve,
            "admin",
            Some("enjoy".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(decided.status, RequestStatus::Approved);
    assert_eq!(decided.decided_by.as_deref(), Some("admin"));
    assert!(decided.decided_at.is_some());

    let err = svc
        .decide_leave(request.id, Decision::Reject, "admin", None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LeaveError::AlreadyDecided {
            status: RequestStatus::Approved
        }
    ));
}

#[tokio::test]
async fn only_the_requester_cancels_a_pending_leave() {
    let svc = service();

    let request = svc
        .submit_leave("1001", annual("2025-04-01", "2025-04-03"))
        .await
        .unwrap();

    let err = svc.cancel_leave(request.id, "1002").await.unwrap_err();
    assert!(matches!(err, LeaveError::Forbidden { .. }));

    let cancelled = svc.cancel_leave(request.id, "1001").await.unwrap();
    assert_eq!(cancelled.status, RequestStatus::Cancelled);

    // Already cancelled, nothing left to decide
    let err = svc
        .decide_leave(request.id, Decision::Approve, "admin", None)
        .await
        .unwrap_err();
    assert!(matches!(err, LeaveError::AlreadyDecided { .. }));
}

#[tokio::test]
async fn leave_list_filters_by_nik_and_status() {
    let svc = service();

    let first = svc
        .submit_leave("1001", annual("2025-04-01", "2025-04-03"))
        .await
        .unwrap();
    svc.submit_leave("1002", annual("2025-05-01", "2025-05-03"))
        .await
        .unwrap();
    svc.decide_leave(first.id, Decision::Approve, "admin", None)
        .await
        .unwrap();

    let mine = svc
        .list_leave(RequestFilter {
            nik: Some("1001".to_string()),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);

    let pending = svc
        .list_leave(RequestFilter {
            nik: None,
            status: Some(RequestStatus::Pending),
        })
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].nik, "1002");
}

#[tokio::test]
async fn swap_with_yourself_is_rejected() {
    let svc = service();

    let err = svc.submit_swap("1001", swap("1001")).await.unwrap_err();
    assert!(matches!(err, LeaveError::Validation { .. }));
}

#[tokio::test]
async fn swap_follows_the_decision_lifecycle() {
    let svc = service();

    let submitted = svc.submit_swap("1001", swap("1002")).await.unwrap();
    assert_eq!(submitted.status, RequestStatus::Pending);

    let decided = svc
        .decide_swap(submitted.id, Decision::Approve, "admin")
        .await
        .unwrap();
    assert_eq!(decided.status, RequestStatus::Approved);

    let err = svc
        .decide_swap(submitted.id, Decision::Reject, "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, LeaveError::AlreadyDecided { .. }));
}

#[tokio::test]
async fn swap_list_matches_either_side() {
    let svc = service();

    svc.submit_swap("1001", swap("1002")).await.unwrap();
    svc.submit_swap("1003", swap("1004")).await.unwrap();

    let for_counterpart = svc
        .list_swaps(RequestFilter {
            nik: Some("1002".to_string()),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(for_counterpart.len(), 1);
    assert_eq!(for_counterpart[0].requester_nik, "1001");
}

#[tokio::test]
async fn only_the_requester_cancels_a_pending_swap() {
    let svc = service();

    let submitted = svc.submit_swap("1001", swap("1002")).await.unwrap();

    // The counterpart cannot cancel either
    let err = svc.cancel_swap(submitted.id, "1002").await.unwrap_err();
    assert!(matches!(err, LeaveError::Forbidden { .. }));

    let cancelled = svc.cancel_swap(submitted.id, "1001").await.unwrap();
    assert_eq!(cancelled.status, RequestStatus::Cancelled);
}

#[tokio::test]
async fn missing_requests_return_not_found() {
    let svc = service();

    let err = svc.get_leave(404).await.unwrap_err();
    assert!(matches!(err, LeaveError::NotFound { .. }));

    let err = svc.get_swap(404).await.unwrap_err();
    assert!(matches!(err, LeaveError::NotFound { .. }));
}
