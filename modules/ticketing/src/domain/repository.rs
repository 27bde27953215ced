//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Assignment, StatusChange, Ticket, TicketFilter, TicketStatus};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Repository for tickets
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Insert a new ticket
    async fn insert(&self, ticket: &Ticket) -> Result<Ticket>;

    /// Find a ticket by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>>;

    /// List tickets matching the filter, newest first
    async fn list(&self, filter: &TicketFilter, limit: u64, offset: u64) -> Result<Vec<Ticket>>;

    /// Count tickets matching the filter
    async fn count(&self, filter: &TicketFilter) -> Result<u64>;

    /// Persist changes to an existing ticket
    async fn update(&self, ticket: &Ticket) -> Result<Ticket>;

    /// Resolved tickets whose last activity is before `cutoff`
    async fn find_stale_resolved(&self, cutoff: DateTime<Utc>) -> Result<Vec<Ticket>>;
}

/// New history entry, id and timestamp assigned by the repository
#[derive(Debug, Clone)]
pub struct NewStatusChange {
    pub ticket_id: Uuid,
    pub from_status: Option<TicketStatus>,
    pub to_status: TicketStatus,
    pub changed_by: String,
    pub note: Option<String>,
}

/// Repository for the status history audit trail
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append a history row
    async fn append(&self, change: &NewStatusChange) -> Result<StatusChange>;

    /// All history rows for a ticket, oldest first
    async fn for_ticket(&self, ticket_id: Uuid) -> Result<Vec<StatusChange>>;
}

/// New assignment, inserted as the active row
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub ticket_id: Uuid,
    pub assignee_nik: String,
    pub assigned_by: String,
}

/// Repository for ticket assignments
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// The active assignment for a ticket, if any
    async fn active_for_ticket(&self, ticket_id: Uuid) -> Result<Option<Assignment>>;

    /// Clear the active flag on every assignment of a ticket
    async fn deactivate_for_ticket(&self, ticket_id: Uuid) -> Result<()>;

    /// Insert a new active assignment
    async fn insert_active(&self, assignment: &NewAssignment) -> Result<Assignment>;
}
