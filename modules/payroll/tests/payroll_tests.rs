//! Integration tests for the payroll domain service

use payroll::domain::{PayrollRepository, Service};
use payroll::{PayrollError, PayrollInput, PayrollRow, Period};
use rust_decimal::Decimal;
use std::sync::Arc;

pub mod mocks {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::RwLock;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    pub struct MockPayrollRepo {
        data: Arc<RwLock<HashMap<(String, String), PayrollRow>>>,
        next_id: Arc<RwLock<i64>>,
    }

    impl MockPayrollRepo {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl PayrollRepository for MockPayrollRepo {
        async fn insert(
            &self,
            nik: &str,
            period: &Period,
            input: &PayrollInput,
        ) -> Result<PayrollRow> {
            let mut next = self.next_id.write();
            *next += 1;
            let now = Utc::now();
            let row = PayrollRow {
                id: *next,
                nik: nik.to_string(),
                period: period.clone(),
                base_salary: input.base_salary,
                allowances: input.allowances,
                deductions: input.deductions,
                net: input.net(),
                published: false,
                created_at: now,
                updated_at: now,
            };
            self.data
                .write()
                .insert((row.nik.clone(), row.period.to_string()), row.clone());
            Ok(row)
        }

        async fn find(&self, nik: &str, period: &Period) -> Result<Option<PayrollRow>> {
            Ok(self
                .data
                .read()
                .get(&(nik.to_string(), period.to_string()))
                .cloned())
        }

        async fn list_period(&self, period: &Period) -> Result<Vec<PayrollRow>> {
            let mut items: Vec<PayrollRow> = self
                .data
                .read()
                .values()
                .filter(|r| r.period == *period)
                .cloned()
                .collect();
            items.sort_by(|a, b| a.nik.cmp(&b.nik));
            Ok(items)
        }

        async fn update(&self, row: &PayrollRow) -> Result<PayrollRow> {
            self.data
                .write()
                .insert((row.nik.clone(), row.period.to_string()), row.clone());
            Ok(row.clone())
        }

        async fn publish_period(&self, period: &Period) -> Result<u64> {
            let mut published = 0;
            for row in self.data.write().values_mut() {
                if row.period == *period && !row.published {
                    row.published = true;
                    row.updated_at = Utc::now();
                    published += 1;
                }
            }
            Ok(published)
        }
    }
}

use mocks::MockPayrollRepo;

fn service() -> Service {
    Service::new(Arc::new(MockPayrollRepo::new()))
}

fn period(s: &str) -> Period {
    Period::parse(s).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn amounts(base: &str, allowances: &str, deductions: &str) -> PayrollInput {
    PayrollInput {
        base_salary: dec(base),
        allowances: dec(allowances),
        deductions: dec(deductions),
    }
}

#[test]
fn period_accepts_only_valid_months() {
    assert!(Period::parse("2025-01").is_some());
    assert!(Period::parse("2025-12").is_some());
    assert!(Period::parse("2025-00").is_none());
    assert!(Period::parse("2025-13").is_none());
    assert!(Period::parse("2025-1").is_none());
    assert!(Period::parse("202503").is_none());
    assert!(Period::parse("abcd-03").is_none());
}

#[tokio::test]
async fn net_is_recomputed_on_every_write() {
    let svc = service();
    let march = period("2025-03");

    let row = svc
        .upsert("1001", &march, amounts("5000000", "750000", "250000"))
        .await
        .unwrap();
    assert_eq!(row.net, dec("5500000"));
    assert!(!row.published);

    let row = svc
        .upsert("1001", &march, amounts("5000000", "0", "100000"))
        .await
        .unwrap();
    assert_eq!(row.net, dec("4900000"));
    assert_eq!(row.id, 1, "upsert overwrites the same row");
}

#[tokio::test]
async fn negative_amounts_are_rejected() {
    let svc = service();

    let err = svc
        .upsert("1001", &period("2025-03"), amounts("-1", "0", "0"))
        .await
        .unwrap_err();
    assert!(matches!(err, PayrollError::Validation { .. }));
}

#[tokio::test]
async fn published_rows_are_immutable() {
    let svc = service();
    let march = period("2025-03");

    svc.upsert("1001", &march, amounts("5000000", "0", "0"))
        .await
        .unwrap();
    assert_eq!(svc.publish_period(&march).await.unwrap(), 1);

    let err = svc
        .upsert("1001", &march, amounts("6000000", "0", "0"))
        .await
        .unwrap_err();
    assert!(matches!(err, PayrollError::AlreadyPublished { .. }));
}

#[tokio::test]
async fn slip_is_hidden_until_published() {
    let svc = service();
    let march = period("2025-03");

    svc.upsert("1001", &march, amounts("5000000", "0", "0"))
        .await
        .unwrap();

    // Unpublished looks like missing
    let err = svc.slip("1001", &march).await.unwrap_err();
    assert!(matches!(err, PayrollError::NotFound { .. }));

    // Admins still see the row
    let row = svc.row("1001", &march).await.unwrap();
    assert!(!row.published);

    svc.publish_period(&march).await.unwrap();
    let slip = svc.slip("1001", &march).await.unwrap();
    assert!(slip.published);
}

#[tokio::test]
async fn publish_flags_only_the_requested_period() {
    let svc = service();
    let march = period("2025-03");
    let april = period("2025-04");

    svc.upsert("1001", &march, amounts("5000000", "0", "0"))
        .await
        .unwrap();
    svc.upsert("1002", &march, amounts("4500000", "0", "0"))
        .await
        .unwrap();
    svc.upsert("1001", &april, amounts("5000000", "0", "0"))
        .await
        .unwrap();

    assert_eq!(svc.publish_period(&march).await.unwrap(), 2);
    // Second publish is a no-op
    assert_eq!(svc.publish_period(&march).await.unwrap(), 0);

    let err = svc.slip("1001", &april).await.unwrap_err();
    assert!(matches!(err, PayrollError::NotFound { .. }));
}

#[tokio::test]
async fn list_period_orders_by_nik() {
    let svc = service();
    let march = period("2025-03");

    svc.upsert("1002", &march, amounts("4500000", "0", "0"))
        .await
        .unwrap();
    svc.upsert("1001", &march, amounts("5000000", "0", "0"))
        .await
        .unwrap();

    let rows = svc.list_period(&march).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].nik, "1001");
    assert_eq!(rows[1].nik, "1002");
}
