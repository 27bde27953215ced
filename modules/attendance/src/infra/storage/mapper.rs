//! Entity to model mappers

use super::entity;
use crate::contract::{AttendanceRecord, AttendanceStatus};
use anyhow::{anyhow, Result};

impl TryFrom<entity::Model> for AttendanceRecord {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self> {
        let status = AttendanceStatus::parse(&entity.status)
            .ok_or_else(|| anyhow!("unknown attendance status in storage: {}", entity.status))?;

        Ok(Self {
            id: entity.id,
            nik: entity.nik,
            date: entity.date,
            check_in: entity.check_in,
            check_out: entity.check_out,
            status,
            note: entity.note,
        })
    }
}

impl From<&AttendanceRecord> for entity::ActiveModel {
    fn from(model: &AttendanceRecord) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            nik: Set(model.nik.clone()),
            date: Set(model.date),
            check_in: Set(model.check_in),
            check_out: Set(model.check_out),
            status: Set(model.status.as_str().to_string()),
            note: Set(model.note.clone()),
        }
    }
}
