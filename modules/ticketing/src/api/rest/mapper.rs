//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::Ticket> for TicketDto {
    fn from(ticket: contract::Ticket) -> Self {
        Self {
            id: ticket.id,
            code: ticket.code,
            reporter_nik: ticket.reporter_nik,
            assignee_nik: ticket.assignee_nik,
            category: ticket.category,
            priority: ticket.priority.as_str().to_string(),
            subject: ticket.subject,
            description: ticket.description,
            status: ticket.status.as_str().to_string(),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            last_activity_at: ticket.last_activity_at,
            closed_at: ticket.closed_at,
        }
    }
}

impl From<contract::StatusChange> for StatusChangeDto {
    fn from(change: contract::StatusChange) -> Self {
        Self {
            id: change.id,
            ticket_id: change.ticket_id,
            from_status: change.from_status.map(|s| s.as_str().to_string()),
            to_status: change.to_status.as_str().to_string(),
            changed_by: change.changed_by,
            note: change.note,
            changed_at: change.changed_at,
        }
    }
}

impl From<contract::Assignment> for AssignmentDto {
    fn from(assignment: contract::Assignment) -> Self {
        Self {
            id: assignment.id,
            ticket_id: assignment.ticket_id,
            assignee_nik: assignment.assignee_nik,
            assigned_by: assignment.assigned_by,
            active: assignment.active,
            assigned_at: assignment.assigned_at,
        }
    }
}
