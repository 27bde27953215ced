//! Entity to model mappers

use super::entity;
use crate::contract::{LeaveRequest, LeaveType, RequestStatus, ShiftSwap};
use anyhow::{anyhow, Result};

impl TryFrom<entity::Model> for LeaveRequest {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self> {
        let leave_type = LeaveType::parse(&entity.leave_type)
            .ok_or_else(|| anyhow!("unknown leave type in storage: {}", entity.leave_type))?;
        let status = RequestStatus::parse(&entity.status)
            .ok_or_else(|| anyhow!("unknown request status in storage: {}", entity.status))?;

        Ok(Self {
            id: entity.id,
            nik: entity.nik,
            leave_type,
            start_date: entity.start_date,
            end_date: entity.end_date,
            reason: entity.reason,
            status,
            decided_by: entity.decided_by,
            decided_at: entity.decided_at,
            decision_note: entity.decision_note,
            created_at: entity.created_at,
        })
    }
}

impl From<&LeaveRequest> for entity::ActiveModel {
    fn from(model: &LeaveRequest) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            nik: Set(model.nik.clone()),
            leave_type: Set(model.leave_type.as_str().to_string()),
            start_date: Set(model.start_date),
            end_date: Set(model.end_date),
            reason: Set(model.reason.clone()),
            status: Set(model.status.as_str().to_string()),
            decided_by: Set(model.decided_by.clone()),
            decided_at: Set(model.decided_at),
            decision_note: Set(model.decision_note.clone()),
            created_at: Set(model.created_at),
        }
    }
}

impl TryFrom<entity::shift_swap::Model> for ShiftSwap {
    type Error = anyhow::Error;

    fn try_from(entity: entity::shift_swap::Model) -> Result<Self> {
        let status = RequestStatus::parse(&entity.status)
            .ok_or_else(|| anyhow!("unknown request status in storage: {}", entity.status))?;

        Ok(Self {
            id: entity.id,
            requester_nik: entity.requester_nik,
            counterpart_nik: entity.counterpart_nik,
            own_shift_date: entity.own_shift_date,
            counterpart_shift_date: entity.counterpart_shift_date,
            reason: entity.reason,
            status,
            decided_by: entity.decided_by,
            decided_at: entity.decided_at,
            created_at: entity.created_at,
        })
    }
}

impl From<&ShiftSwap> for entity::shift_swap::ActiveModel {
    fn from(model: &ShiftSwap) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            requester_nik: Set(model.requester_nik.clone()),
            counterpart_nik: Set(model.counterpart_nik.clone()),
            own_shift_date: Set(model.own_shift_date),
            counterpart_shift_date: Set(model.counterpart_shift_date),
            reason: Set(model.reason.clone()),
            status: Set(model.status.as_str().to_string()),
            decided_by: Set(model.decided_by.clone()),
            decided_at: Set(model.decided_at),
            created_at: Set(model.created_at),
        }
    }
}
