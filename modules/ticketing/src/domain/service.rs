//! Domain service - ticket lifecycle orchestration

use super::repository::{
    AssignmentRepository, HistoryRepository, NewAssignment, NewStatusChange, TicketRepository,
};
use crate::config::TicketingConfig;
use crate::contract::{
    Assignment, NewTicket, StatusChange, Ticket, TicketError, TicketFilter, TicketStatus,
};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Actor recorded on history rows written by batch jobs
pub const SYSTEM_ACTOR: &str = "system";

const MAX_SUBJECT_LEN: usize = 200;

/// Domain service for ticket management
pub struct Service {
    tickets: Arc<dyn TicketRepository>,
    history: Arc<dyn HistoryRepository>,
    assignments: Arc<dyn AssignmentRepository>,
    config: TicketingConfig,
}

impl Service {
    pub fn new(
        tickets: Arc<dyn TicketRepository>,
        history: Arc<dyn HistoryRepository>,
        assignments: Arc<dyn AssignmentRepository>,
        config: TicketingConfig,
    ) -> Self {
        Self {
            tickets,
            history,
            assignments,
            config,
        }
    }

    pub fn config(&self) -> &TicketingConfig {
        &self.config
    }

    /// Create a ticket reported by `reporter_nik`
    pub async fn create_ticket(
        &self,
        reporter_nik: &str,
        input: NewTicket,
    ) -> Result<Ticket, TicketError> {
        validate_new_ticket(&input)?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        let ticket = Ticket {
            id,
            code: ticket_code(id),
            reporter_nik: reporter_nik.to_string(),
            assignee_nik: None,
            category: input.category,
            priority: input.priority,
            subject: input.subject,
            description: input.description,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
            last_activity_at: now,
            closed_at: None,
        };

        let ticket = self
            .tickets
            .insert(&ticket)
            .await
            .map_err(|e| internal("insert ticket", e))?;

        // Creation entry anchors the audit trail
        self.history
            .append(&NewStatusChange {
                ticket_id: ticket.id,
                from_status: None,
                to_status: TicketStatus::Open,
                changed_by: reporter_nik.to_string(),
                note: Some("ticket created".to_string()),
            })
            .await
            .map_err(|e| internal("append creation history", e))?;

        Ok(ticket)
    }

    /// Get a ticket by id
    pub async fn get_ticket(&self, id: Uuid) -> Result<Ticket, TicketError> {
        self.tickets
            .find_by_id(id)
            .await
            .map_err(|e| internal("find ticket", e))?
            .ok_or(TicketError::NotFound { id })
    }

    /// List tickets with filters and pagination
    pub async fn list_tickets(
        &self,
        filter: TicketFilter,
        limit: Option<u64>,
        offset: u64,
    ) -> Result<(Vec<Ticket>, u64), TicketError> {
        let limit = limit
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size);

        let items = self
            .tickets
            .list(&filter, limit, offset)
            .await
            .map_err(|e| internal("list tickets", e))?;
        let total = self
            .tickets
            .count(&filter)
            .await
            .map_err(|e| internal("count tickets", e))?;

        Ok((items, total))
    }

    /// Status history of a ticket, oldest first
    pub async fn ticket_history(&self, id: Uuid) -> Result<Vec<StatusChange>, TicketError> {
        // 404 rather than an empty list for unknown ids
        self.get_ticket(id).await?;

        self.history
            .for_ticket(id)
            .await
            .map_err(|e| internal("load history", e))
    }

    /// Move a ticket to a new status, recording the change
    pub async fn change_status(
        &self,
        id: Uuid,
        to: TicketStatus,
        changed_by: &str,
        note: Option<String>,
    ) -> Result<Ticket, TicketError> {
        let mut ticket = self.get_ticket(id).await?;
        let from = ticket.status;

        if !from.can_transition_to(to) {
            return Err(TicketError::InvalidTransition { from, to });
        }

        let now = Utc::now();
        ticket.status = to;
        ticket.updated_at = now;
        ticket.last_activity_at = now;
        if to == TicketStatus::Closed {
            ticket.closed_at = Some(now);
        }

        let ticket = self
            .tickets
            .update(&ticket)
            .await
            .map_err(|e| internal("update ticket status", e))?;

        self.history
            .append(&NewStatusChange {
                ticket_id: id,
                from_status: Some(from),
                to_status: to,
                changed_by: changed_by.to_string(),
                note,
            })
            .await
            .map_err(|e| internal("append status history", e))?;

        tracing::info!(ticket = %ticket.code, %from, %to, by = changed_by, "ticket status changed");
        Ok(ticket)
    }

    /// Assign a ticket, keeping at most one active assignment
    pub async fn assign_ticket(
        &self,
        id: Uuid,
        assignee_nik: &str,
        assigned_by: &str,
    ) -> Result<Assignment, TicketError> {
        if assignee_nik.trim().is_empty() {
            return Err(TicketError::Validation {
                message: "assignee_nik must not be empty".to_string(),
            });
        }

        let mut ticket = self.get_ticket(id).await?;
        if ticket.status.is_terminal() {
            return Err(TicketError::Validation {
                message: format!("cannot assign a {} ticket", ticket.status),
            });
        }

        // Re-assigning to the current assignee is a no-op
        if ticket.assignee_nik.as_deref() == Some(assignee_nik) {
            if let Some(existing) = self
                .assignments
                .active_for_ticket(id)
                .await
                .map_err(|e| internal("load active assignment", e))?
            {
                return Ok(existing);
            }
        }

        let previous = ticket.assignee_nik.clone();
        self.assignments
            .deactivate_for_ticket(id)
            .await
            .map_err(|e| internal("deactivate assignments", e))?;

        let assignment = self
            .assignments
            .insert_active(&NewAssignment {
                ticket_id: id,
                assignee_nik: assignee_nik.to_string(),
                assigned_by: assigned_by.to_string(),
            })
            .await
            .map_err(|e| internal("insert assignment", e))?;

        let now = Utc::now();
        ticket.assignee_nik = Some(assignee_nik.to_string());
        ticket.updated_at = now;
        ticket.last_activity_at = now;
        self.tickets
            .update(&ticket)
            .await
            .map_err(|e| internal("update ticket assignee", e))?;

        // Handover is visible in the same audit trail as status changes
        let note = match previous {
            Some(prev) => format!("reassigned from {} to {}", prev, assignee_nik),
            None => format!("assigned to {}", assignee_nik),
        };
        self.history
            .append(&NewStatusChange {
                ticket_id: id,
                from_status: Some(ticket.status),
                to_status: ticket.status,
                changed_by: assigned_by.to_string(),
                note: Some(note),
            })
            .await
            .map_err(|e| internal("append assignment history", e))?;

        Ok(assignment)
    }

    /// Close every Resolved ticket whose last activity is older than the
    /// configured threshold. Returns the number of tickets closed; a failure
    /// on one ticket does not abort the batch.
    pub async fn auto_close_stale(&self, now: DateTime<Utc>) -> Result<usize, TicketError> {
        let threshold = Duration::days(i64::from(self.config.auto_close_after_days));
        let cutoff = now - threshold;

        let stale = self
            .tickets
            .find_stale_resolved(cutoff)
            .await
            .map_err(|e| internal("find stale tickets", e))?;

        let mut closed = 0usize;
        for mut ticket in stale {
            // A concurrent close may have won the race
            if ticket.status != TicketStatus::Resolved {
                continue;
            }

            ticket.status = TicketStatus::Closed;
            ticket.updated_at = now;
            ticket.last_activity_at = now;
            ticket.closed_at = Some(now);

            if let Err(e) = self.tickets.update(&ticket).await {
                tracing::warn!(ticket = %ticket.code, error = %e, "auto-close update failed");
                continue;
            }

            if let Err(e) = self
                .history
                .append(&NewStatusChange {
                    ticket_id: ticket.id,
                    from_status: Some(TicketStatus::Resolved),
                    to_status: TicketStatus::Closed,
                    changed_by: SYSTEM_ACTOR.to_string(),
                    note: Some(format!(
                        "auto-closed after {} days of inactivity",
                        self.config.auto_close_after_days
                    )),
                })
                .await
            {
                tracing::warn!(ticket = %ticket.code, error = %e, "auto-close history append failed");
            }

            closed += 1;
        }

        Ok(closed)
    }
}

fn validate_new_ticket(input: &NewTicket) -> Result<(), TicketError> {
    if input.subject.trim().is_empty() {
        return Err(TicketError::Validation {
            message: "subject must not be empty".to_string(),
        });
    }
    if input.subject.len() > MAX_SUBJECT_LEN {
        return Err(TicketError::Validation {
            message: format!("subject exceeds {} characters", MAX_SUBJECT_LEN),
        });
    }
    if input.category.trim().is_empty() {
        return Err(TicketError::Validation {
            message: "category must not be empty".to_string(),
        });
    }
    Ok(())
}

fn ticket_code(id: Uuid) -> String {
    let simple = id.simple().to_string();
    format!("TKT-{}", simple[..8].to_uppercase())
}

fn internal(context: &str, error: anyhow::Error) -> TicketError {
    tracing::error!("{}: {:?}", context, error);
    TicketError::Internal
}
