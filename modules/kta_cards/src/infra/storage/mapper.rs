//! Entity to model mappers

use super::entity;
use crate::contract::{CardRequest, CardRequestType, CardStatus};
use anyhow::{anyhow, Result};

impl TryFrom<entity::Model> for CardRequest {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self> {
        let request_type = CardRequestType::parse(&entity.request_type).ok_or_else(|| {
            anyhow!("unknown card request type in storage: {}", entity.request_type)
        })?;
        let status = CardStatus::parse(&entity.status)
            .ok_or_else(|| anyhow!("unknown card status in storage: {}", entity.status))?;

        Ok(Self {
            id: entity.id,
            nik: entity.nik,
            request_type,
            reason: entity.reason,
            status,
            processed_by: entity.processed_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&CardRequest> for entity::ActiveModel {
    fn from(model: &CardRequest) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            nik: Set(model.nik.clone()),
            request_type: Set(model.request_type.as_str().to_string()),
            reason: Set(model.reason.clone()),
            status: Set(model.status.as_str().to_string()),
            processed_by: Set(model.processed_by.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}
