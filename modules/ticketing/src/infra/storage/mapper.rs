//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Status and
//! priority columns are plain strings, so entity-to-model conversion can
//! fail on rows written by a different schema version.

use super::entity;
use crate::contract::{Assignment, Priority, StatusChange, Ticket, TicketStatus};
use anyhow::{anyhow, Result};

// ===== Ticket conversions =====

impl TryFrom<entity::Model> for Ticket {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self> {
        Ok(Self {
            id: entity.id,
            code: entity.code,
            reporter_nik: entity.reporter_nik,
            assignee_nik: entity.assignee_nik,
            category: entity.category,
            priority: parse_priority(&entity.priority)?,
            subject: entity.subject,
            description: entity.description,
            status: parse_status(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            last_activity_at: entity.last_activity_at,
            closed_at: entity.closed_at,
        })
    }
}

impl From<&Ticket> for entity::ActiveModel {
    fn from(model: &Ticket) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            code: Set(model.code.clone()),
            reporter_nik: Set(model.reporter_nik.clone()),
            assignee_nik: Set(model.assignee_nik.clone()),
            category: Set(model.category.clone()),
            priority: Set(model.priority.as_str().to_string()),
            subject: Set(model.subject.clone()),
            description: Set(model.description.clone()),
            status: Set(model.status.as_str().to_string()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            last_activity_at: Set(model.last_activity_at),
            closed_at: Set(model.closed_at),
        }
    }
}

// ===== History conversions =====

impl TryFrom<entity::history::Model> for StatusChange {
    type Error = anyhow::Error;

    fn try_from(entity: entity::history::Model) -> Result<Self> {
        let from_status = entity
            .from_status
            .as_deref()
            .map(|s| parse_status(s))
            .transpose()?;

        Ok(Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            from_status,
            to_status: parse_status(&entity.to_status)?,
            changed_by: entity.changed_by,
            note: entity.note,
            changed_at: entity.changed_at,
        })
    }
}

// ===== Assignment conversions =====

impl From<entity::assignment::Model> for Assignment {
    fn from(entity: entity::assignment::Model) -> Self {
        Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            assignee_nik: entity.assignee_nik,
            assigned_by: entity.assigned_by,
            active: entity.active,
            assigned_at: entity.assigned_at,
        }
    }
}

fn parse_status(s: &str) -> Result<TicketStatus> {
    TicketStatus::parse(s).ok_or_else(|| anyhow!("unknown ticket status in storage: {}", s))
}

fn parse_priority(s: &str) -> Result<Priority> {
    Priority::parse(s).ok_or_else(|| anyhow!("unknown ticket priority in storage: {}", s))
}
