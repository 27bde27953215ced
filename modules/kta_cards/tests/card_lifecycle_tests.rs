//! Integration tests for the KTA card request lifecycle

use kta_cards::domain::{CardFilter, CardRepository, Service};
use kta_cards::{CardError, CardRequest, CardRequestType, CardStatus, NewCardRequest};
use std::sync::Arc;

pub mod mocks {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::RwLock;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    pub struct MockCardRepo {
        data: Arc<RwLock<HashMap<i64, CardRequest>>>,
        next_id: Arc<RwLock<i64>>,
    }

    impl MockCardRepo {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl CardRepository for MockCardRepo {
        async fn insert(&self, nik: &str, request: &NewCardRequest) -> Result<CardRequest> {
            let mut next = self.next_id.write();
            *next += 1;
            let now = Utc::now();
            let row = CardRequest {
                id: *next,
                nik: nik.to_string(),
                request_type: request.request_type,
                reason: request.reason.clone(),
                status: CardStatus::Pending,
                processed_by: None,
                created_at: now,
                updated_at: now,
            };
            self.data.write().insert(row.id, row.clone());
            Ok(row)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<CardRequest>> {
            Ok(self.data.read().get(&id).cloned())
        }

        async fn list(&self, filter: &CardFilter) -> Result<Vec<CardRequest>> {
            let mut items: Vec<CardRequest> = self
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

        async fn update(&self, request: &CardRequest) -> Result<CardRequest> {
            self.data.write().insert(request.id, request.clone());
            Ok(request.clone())
        }

        async fn find_open_for_nik(&self, nik: &str) -> Result<Vec<CardRequest>> {
            Ok(self
                .data
                .read()
                .values()
                .filter(|r| {
                    r.nik == nik
                        && matches!(r.status, CardStatus::Pending | CardStatus::Printed)
                })
                .cloned()
                .collect())
        }
    }
}

use mocks::MockCardRepo;

fn service() -> Service {
    Service::new(Arc::new(MockCardRepo::new()))
}

fn replacement() -> NewCardRequest {
    NewCardRequest {
        request_type: CardRequestType::Replacement,
        reason: "card lost".to_string(),
    }
}

#[tokio::test]
async fn submitted_request_starts_pending() {
    let svc = service();

    let request = svc.submit("1001", replacement()).await.unwrap();
    assert_eq!(request.status, CardStatus::Pending);
    assert!(request.processed_by.is_none());
}

#[tokio::test]
async fn empty_reason_is_rejected() {
    let svc = service();

    let err = svc
        .submit(
            "1001",
            NewCardRequest {
                request_type: CardRequestType::New,
                reason: "  ".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CardError::Validation { .. }));
}

#[tokio::test]
async fn one_open_request_per_employee() {
    let svc = service();

    let first = svc.submit("1001", replacement()).await.unwrap();

    let err = svc.submit("1001", replacement()).await.unwrap_err();
    assert!(matches!(err, CardError::AlreadyOpen { .. }));

    // Printed still counts as open
    svc.change_status(first.id, CardStatus::Printed, "admin")
        .await
        .unwrap();
    let err = svc.submit("1001", replacement()).await.unwrap_err();
    assert!(matches!(err, CardError::AlreadyOpen { .. }));

    // Delivered frees the slot
    svc.change_status(first.id, CardStatus::Delivered, "admin")
        .await
        .unwrap();
    svc.submit("1001", replacement()).await.unwrap();
}

#[tokio::test]
async fn lifecycle_moves_pending_printed_delivered() {
    let svc = service();

    let request = svc.submit("1001", replacement()).await.unwrap();

    let printed = svc
        .change_status(request.id, CardStatus::Printed, "admin")
        .await
        .unwrap();
    assert_eq!(printed.status, CardStatus::Printed);
    assert_eq!(printed.processed_by.as_deref(), Some("admin"));

    let delivered = svc
        .change_status(request.id, CardStatus::Delivered, "admin")
        .await
        .unwrap();
    assert_eq!(delivered.status, CardStatus::Delivered);
}

#[tokio::test]
async fn illegal_transitions_conflict() {
    let svc = service();

    let request = svc.submit("1001", replacement()).await.unwrap();

    // Pending cannot jump straight to Delivered
    let err = svc
        .change_status(request.id, CardStatus::Delivered, "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, CardError::IllegalTransition { .. }));

    // Rejected is final
    svc.change_status(request.id, CardStatus::Rejected, "admin")
        .await
        .unwrap();
    let err = svc
        .change_status(request.id, CardStatus::Printed, "admin")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CardError::IllegalTransition {
            from: CardStatus::Rejected,
            ..
        }
    ));
}

#[tokio::test]
async fn list_filters_by_status() {
    let svc = service();

    let first = svc.submit("1001", replacement()).await.unwrap();
    svc.submit("1002", replacement()).await.unwrap();
    svc.change_status(first.id, CardStatus::Printed, "admin")
        .await
        .unwrap();

    let printed = svc
        .list(CardFilter {
            nik: None,
            status: Some(CardStatus::Printed),
        })
        .await
        .unwrap();
    assert_eq!(printed.len(), 1);
    assert_eq!(printed[0].nik, "1001");
}

#[tokio::test]
async fn missing_request_returns_not_found() {
    let svc = service();

    let err = svc.get(404).await.unwrap_err();
    assert!(matches!(err, CardError::NotFound { id: 404 }));
}
