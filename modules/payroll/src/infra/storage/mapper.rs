//! Entity to model mappers

use super::entity;
use crate::contract::{PayrollRow, Period};
use anyhow::{anyhow, Result};

impl TryFrom<entity::Model> for PayrollRow {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self> {
        let period = Period::parse(&entity.period)
            .ok_or_else(|| anyhow!("malformed period in storage: {}", entity.period))?;

        Ok(Self {
            id: entity.id,
            nik: entity.nik,
            period,
            base_salary: entity.base_salary,
            allowances: entity.allowances,
            deductions: entity.deductions,
            net: entity.net,
            published: entity.published,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&PayrollRow> for entity::ActiveModel {
    fn from(model: &PayrollRow) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            nik: Set(model.nik.clone()),
            period: Set(model.period.as_str().to_string()),
            base_salary: Set(model.base_salary),
            allowances: Set(model.allowances),
            deductions: Set(model.deductions),
            net: Set(model.net),
            published: Set(model.published),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}
