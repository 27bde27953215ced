//! Contract models for the ticketing module
//!
//! These models are transport-agnostic. REST DTOs live in `api/rest/dto.rs`
//! and database entities in `infra/storage/entity.rs`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Ticket lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    Rejected,
}

impl TicketStatus {
    /// Lifecycle graph: Closed and Rejected are terminal, Resolved and
    /// InProgress may fall back to Open when the reporter pushes back.
    pub fn can_transition_to(self, next: TicketStatus) -> bool {
        use TicketStatus::*;
        matches!(
            (self, next),
            (Open, InProgress)
                | (Open, Rejected)
                | (InProgress, Resolved)
                | (InProgress, Open)
                | (Resolved, Closed)
                | (Resolved, Open)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TicketStatus::Closed | TicketStatus::Rejected)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
            TicketStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(TicketStatus::Open),
            "in_progress" => Some(TicketStatus::InProgress),
            "resolved" => Some(TicketStatus::Resolved),
            "closed" => Some(TicketStatus::Closed),
            "rejected" => Some(TicketStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "urgent" => Some(Priority::Urgent),
            _ => None,
        }
    }
}

/// A helpdesk ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: Uuid,
    /// Human-facing reference, e.g. "TKT-4F09A1C2"
    pub code: String,
    /// NIK of the reporting employee
    pub reporter_nik: String,
    /// NIK of the current assignee, if any
    pub assignee_nik: Option<String>,
    pub category: String,
    pub priority: Priority,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Bumped by every status change, assignment or comment; drives auto-close
    pub last_activity_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// Input for creating a ticket
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub category: String,
    pub priority: Priority,
    pub subject: String,
    pub description: String,
}

/// One row of the status history audit trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub id: i64,
    pub ticket_id: Uuid,
    /// None for the creation entry
    pub from_status: Option<TicketStatus>,
    pub to_status: TicketStatus,
    /// NIK of the actor, or "system" for batch jobs
    pub changed_by: String,
    pub note: Option<String>,
    pub changed_at: DateTime<Utc>,
}

/// Assignment row; at most one row per ticket has `active = true`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: i64,
    pub ticket_id: Uuid,
    pub assignee_nik: String,
    pub assigned_by: String,
    pub active: bool,
    pub assigned_at: DateTime<Utc>,
}

/// Filters for listing tickets
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub assignee_nik: Option<String>,
    pub reporter_nik: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states_accept_nothing() {
        for next in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
            TicketStatus::Rejected,
        ] {
            assert!(!TicketStatus::Closed.can_transition_to(next));
            assert!(!TicketStatus::Rejected.can_transition_to(next));
        }
    }

    #[test]
    fn resolved_can_reopen_or_close() {
        assert!(TicketStatus::Resolved.can_transition_to(TicketStatus::Closed));
        assert!(TicketStatus::Resolved.can_transition_to(TicketStatus::Open));
        assert!(!TicketStatus::Resolved.can_transition_to(TicketStatus::Rejected));
    }

    #[test]
    fn status_strings_round_trip() {
        for status in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
            TicketStatus::Rejected,
        ] {
            assert_eq!(TicketStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TicketStatus::parse("nonsense"), None);
    }
}
