//! Domain service - check-in/check-out rules

use super::repository::{AttendanceRepository, NewAttendanceRecord};
use crate::config::AttendanceConfig;
use crate::contract::{AttendanceError, AttendanceRecord, AttendanceStatus};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use std::sync::Arc;

/// Domain service for attendance
pub struct Service {
    records: Arc<dyn AttendanceRepository>,
    late_threshold: NaiveTime,
}

impl Service {
    /// Fails when the configured workday start does not parse, or when the
    /// grace period would push the lateness threshold past midnight
    pub fn new(
        records: Arc<dyn AttendanceRepository>,
        config: &AttendanceConfig,
    ) -> anyhow::Result<Self> {
        let workday_start = config.workday_start_time()?;
        let grace = Duration::minutes(i64::from(config.late_grace_minutes));
        let (late_threshold, wrapped) = workday_start.overflowing_add_signed(grace);
        if wrapped != 0 {
            anyhow::bail!(
                "workday_start '{}' plus {} minutes of grace crosses midnight",
                config.workday_start,
                config.late_grace_minutes
            );
        }

        Ok(Self {
            records,
            late_threshold,
        })
    }

    /// Open today's record for an employee
    pub async fn check_in(
        &self,
        nik: &str,
        now: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<AttendanceRecord, AttendanceError> {
        let date = now.date_naive();

        if let Some(existing) = self
            .records
            .find_by_nik_and_date(nik, date)
            .await
            .map_err(|e| internal("find attendance", e))?
        {
            return Err(AttendanceError::AlreadyCheckedIn {
                date: existing.date,
            });
        }

        let check_in = now.time();
        let record = self
            .records
            .insert(&NewAttendanceRecord {
                nik: nik.to_string(),
                date,
                check_in,
                status: self.classify(check_in),
                note,
            })
            .await
            .map_err(|e| internal("insert attendance", e))?;

        tracing::info!(nik, %date, status = record.status.as_str(), "checked in");
        Ok(record)
    }

    /// Stamp today's check-out
    pub async fn check_out(
        &self,
        nik: &str,
        now: DateTime<Utc>,
    ) -> Result<AttendanceRecord, AttendanceError> {
        let date = now.date_naive();

        let mut record = self
            .records
            .find_by_nik_and_date(nik, date)
            .await
            .map_err(|e| internal("find attendance", e))?
            .ok_or(AttendanceError::NotCheckedIn { date })?;

        if record.check_out.is_some() {
            return Err(AttendanceError::AlreadyCheckedOut { date });
        }

        let check_out = now.time();
        if check_out < record.check_in {
            return Err(AttendanceError::Validation {
                message: "check-out earlier than check-in".to_string(),
            });
        }

        record.check_out = Some(check_out);
        self.records
            .update(&record)
            .await
            .map_err(|e| internal("update attendance", e))
    }

    /// Records for an employee between two dates inclusive
    pub async fn list_for_employee(
        &self,
        nik: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, AttendanceError> {
        if from > to {
            return Err(AttendanceError::Validation {
                message: "'from' must not be after 'to'".to_string(),
            });
        }

        self.records
            .list_range(nik, from, to)
            .await
            .map_err(|e| internal("list attendance", e))
    }

    /// Today's record, 404-style error when the employee has not checked in
    pub async fn today(
        &self,
        nik: &str,
        today: NaiveDate,
    ) -> Result<AttendanceRecord, AttendanceError> {
        self.records
            .find_by_nik_and_date(nik, today)
            .await
            .map_err(|e| internal("find attendance", e))?
            .ok_or_else(|| AttendanceError::NotFound {
                nik: nik.to_string(),
                date: today,
            })
    }

    fn classify(&self, check_in: NaiveTime) -> AttendanceStatus {
        if check_in > self.late_threshold {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::OnTime
        }
    }
}

fn internal(context: &str, error: anyhow::Error) -> AttendanceError {
    tracing::error!("{}: {:?}", context, error);
    AttendanceError::Internal
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;

    struct NoopRepo;

    #[async_trait]
    impl AttendanceRepository for NoopRepo {
        async fn insert(&self, _: &NewAttendanceRecord) -> Result<AttendanceRecord> {
            anyhow::bail!("not used")
        }
        async fn find_by_nik_and_date(
            &self,
            _: &str,
            _: NaiveDate,
        ) -> Result<Option<AttendanceRecord>> {
            Ok(None)
        }
        async fn update(&self, _: &AttendanceRecord) -> Result<AttendanceRecord> {
            anyhow::bail!("not used")
        }
        async fn list_range(
            &self,
            _: &str,
            _: NaiveDate,
            _: NaiveDate,
        ) -> Result<Vec<AttendanceRecord>> {
            Ok(vec![])
        }
    }

    fn service(grace: u32) -> Service {
        let config = AttendanceConfig {
            workday_start: "08:00".to_string(),
            late_grace_minutes: grace,
        };
        match Service::new(Arc::new(NoopRepo), &config) {
            Ok(s) => s,
            Err(e) => panic!("valid config must build a service: {}", e),
        }
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        match NaiveTime::from_hms_opt(h, m, 0) {
            Some(t) => t,
            None => panic!("bad test time"),
        }
    }

    #[test]
    fn arrival_within_grace_is_on_time() {
        let svc = service(15);
        assert_eq!(svc.classify(t(7, 45)), AttendanceStatus::OnTime);
        assert_eq!(svc.classify(t(8, 0)), AttendanceStatus::OnTime);
        assert_eq!(svc.classify(t(8, 15)), AttendanceStatus::OnTime);
    }

    #[test]
    fn arrival_after_grace_is_late() {
        let svc = service(15);
        assert_eq!(svc.classify(t(8, 16)), AttendanceStatus::Late);
        assert_eq!(svc.classify(t(10, 0)), AttendanceStatus::Late);
    }

    #[test]
    fn zero_grace_marks_anything_after_start_late() {
        let svc = service(0);
        assert_eq!(svc.classify(t(8, 0)), AttendanceStatus::OnTime);
        assert_eq!(svc.classify(t(8, 1)), AttendanceStatus::Late);
    }

    #[test]
    fn grace_crossing_midnight_is_rejected() {
        let config = AttendanceConfig {
            workday_start: "23:50".to_string(),
            late_grace_minutes: 15,
        };
        assert!(Service::new(Arc::new(NoopRepo), &config).is_err());
    }
}
