//! Integration tests for the ticketing domain service

use chrono::{Duration, Utc};
use std::sync::Arc;
use ticketing::domain::repository::{
    AssignmentRepository, HistoryRepository, NewAssignment, NewStatusChange, TicketRepository,
};
use ticketing::domain::Service;
use ticketing::{NewTicket, Priority, TicketError, TicketFilter, TicketStatus, TicketingConfig};
use uuid::Uuid;

// Mock repository implementations for testing
pub mod mocks {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::DateTime;
    use parking_lot::RwLock;
    use std::collections::HashMap;
    use ticketing::{Assignment, StatusChange, Ticket};

    #[derive(Clone, Default)]
    pub struct MockTicketRepo {
        data: Arc<RwLock<HashMap<Uuid, Ticket>>>,
    }

    impl MockTicketRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count(&self) -> usize {
            self.data.read().len()
        }
    }

    #[async_trait]
    impl TicketRepository for MockTicketRepo {
        async fn insert(&self, ticket: &Ticket) -> Result<Ticket> {
            self.data.write().insert(ticket.id, ticket.clone());
            Ok(ticket.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>> {
            Ok(self.data.read().get(&id).cloned())
        }

        async fn list(
            &self,
            filter: &TicketFilter,
            limit: u64,
            offset: u64,
        ) -> Result<Vec<Ticket>> {
            let mut items: Vec<Ticket> = self
                .data
                .read()
                .values()
                .filter(|t| matches_filter(t, filter))
                .cloned()
                .collect();
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(items
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect())
        }

        async fn count(&self, filter: &TicketFilter) -> Result<u64> {
            Ok(self
                .data
                .read()
                .values()
                .filter(|t| matches_filter(t, filter))
                .count() as u64)
        }

        async fn update(&self, ticket: &Ticket) -> Result<Ticket> {
            self.data.write().insert(ticket.id, ticket.clone());
            Ok(ticket.clone())
        }

        async fn find_stale_resolved(&self, cutoff: DateTime<Utc>) -> Result<Vec<Ticket>> {
            Ok(self
                .data
                .read()
                .values()
                .filter(|t| t.status == TicketStatus::Resolved && t.last_activity_at < cutoff)
                .cloned()
                .collect())
        }
    }

    fn matches_filter(ticket: &Ticket, filter: &TicketFilter) -> bool {
        filter.status.is_none_or(|s| ticket.status == s)
            && filter
                .assignee_nik
                .as_deref()
                .is_none_or(|a| ticket.assignee_nik.as_deref() == Some(a))
            && filter
                .reporter_nik
                .as_deref()
                .is_none_or(|r| ticket.reporter_nik == r)
    }

    #[derive(Clone, Default)]
    pub struct MockHistoryRepo {
        rows: Arc<RwLock<Vec<StatusChange>>>,
    }

    impl MockHistoryRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn rows_for(&self, ticket_id: Uuid) -> Vec<StatusChange> {
            self.rows
                .read()
                .iter()
                .filter(|c| c.ticket_id == ticket_id)
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl HistoryRepository for MockHistoryRepo {
        async fn append(&self, change: &NewStatusChange) -> Result<StatusChange> {
            let mut rows = self.rows.write();
            let row = StatusChange {
                id: rows.len() as i64 + 1,
                ticket_id: change.ticket_id,
                from_status: change.from_status,
                to_status: change.to_status,
                changed_by: change.changed_by.clone(),
                note: change.note.clone(),
                changed_at: Utc::now(),
            };
            rows.push(row.clone());
            Ok(row)
        }

        async fn for_ticket(&self, ticket_id: Uuid) -> Result<Vec<StatusChange>> {
            Ok(self.rows_for(ticket_id))
        }
    }

    #[derive(Clone, Default)]
    pub struct MockAssignmentRepo {
        rows: Arc<RwLock<Vec<Assignment>>>,
    }

    impl MockAssignmentRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn active_count(&self, ticket_id: Uuid) -> usize {
            self.rows
                .read()
                .iter()
                .filter(|a| a.ticket_id == ticket_id && a.active)
                .count()
        }

        pub fn total_count(&self, ticket_id: Uuid) -> usize {
            self.rows
                .read()
                .iter()
                .filter(|a| a.ticket_id == ticket_id)
                .count()
        }
    }

    #[async_trait]
    impl AssignmentRepository for MockAssignmentRepo {
        async fn active_for_ticket(&self, ticket_id: Uuid) -> Result<Option<Assignment>> {
            Ok(self
                .rows
                .read()
                .iter()
                .find(|a| a.ticket_id == ticket_id && a.active)
                .cloned())
        }

        async fn deactivate_for_ticket(&self, ticket_id: Uuid) -> Result<()> {
            for a in self.rows.write().iter_mut() {
                if a.ticket_id == ticket_id {
                    a.active = false;
                }
            }
            Ok(())
        }

        async fn insert_active(&self, assignment: &NewAssignment) -> Result<Assignment> {
            let mut rows = self.rows.write();
            let row = Assignment {
                id: rows.len() as i64 + 1,
                ticket_id: assignment.ticket_id,
                assignee_nik: assignment.assignee_nik.clone(),
                assigned_by: assignment.assigned_by.clone(),
                active: true,
                assigned_at: Utc::now(),
            };
            rows.push(row.clone());
            Ok(row)
        }
    }
}

use mocks::{MockAssignmentRepo, MockHistoryRepo, MockTicketRepo};

struct Fixture {
    service: Service,
    tickets: MockTicketRepo,
    history: MockHistoryRepo,
    assignments: MockAssignmentRepo,
}

fn fixture() -> Fixture {
    fixture_with_config(TicketingConfig::default())
}

fn fixture_with_config(config: TicketingConfig) -> Fixture {
    let tickets = MockTicketRepo::new();
    let history = MockHistoryRepo::new();
    let assignments = MockAssignmentRepo::new();
    let service = Service::new(
        Arc::new(tickets.clone()),
        Arc::new(history.clone()),
        Arc::new(assignments.clone()),
        config,
    );
    Fixture {
        service,
        tickets,
        history,
        assignments,
    }
}

fn sample_ticket() -> NewTicket {
    NewTicket {
        category: "it_support".to_string(),
        priority: Priority::Medium,
        subject: "VPN keeps dropping".to_string(),
        description: "Drops every few minutes since Monday".to_string(),
    }
}

#[tokio::test]
async fn create_ticket_starts_open_with_creation_history() {
    let fx = fixture();

    let ticket = fx
        .service
        .create_ticket("198801012015011001", sample_ticket())
        .await
        .unwrap();

    assert_eq!(ticket.status, TicketStatus::Open);
    assert!(ticket.code.starts_with("TKT-"));
    assert_eq!(ticket.reporter_nik, "198801012015011001");
    assert!(ticket.assignee_nik.is_none());

    let history = fx.history.rows_for(ticket.id);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].from_status, None);
    assert_eq!(history[0].to_status, TicketStatus::Open);
    assert_eq!(fx.tickets.count(), 1);
}

#[tokio::test]
async fn create_ticket_rejects_empty_subject() {
    let fx = fixture();
    let mut input = sample_ticket();
    input.subject = "   ".to_string();

    let err = fx.service.create_ticket("1", input).await.unwrap_err();
    assert!(matches!(err, TicketError::Validation { .. }));
}

#[tokio::test]
async fn status_changes_follow_lifecycle_and_record_history() {
    let fx = fixture();
    let ticket = fx.service.create_ticket("1", sample_ticket()).await.unwrap();

    fx.service
        .change_status(ticket.id, TicketStatus::InProgress, "2", None)
        .await
        .unwrap();
    fx.service
        .change_status(ticket.id, TicketStatus::Resolved, "2", Some("patched".into()))
        .await
        .unwrap();
    let closed = fx
        .service
        .change_status(ticket.id, TicketStatus::Closed, "2", None)
        .await
        .unwrap();

    assert_eq!(closed.status, TicketStatus::Closed);
    assert!(closed.closed_at.is_some());

    let history = fx.service.ticket_history(ticket.id).await.unwrap();
    assert_eq!(history.len(), 4); // creation + 3 transitions
    assert_eq!(history[2].note.as_deref(), Some("patched"));
    assert_eq!(history[3].from_status, Some(TicketStatus::Resolved));
    assert_eq!(history[3].to_status, TicketStatus::Closed);
}

#[tokio::test]
async fn illegal_transition_is_rejected_without_history() {
    let fx = fixture();
    let ticket = fx.service.create_ticket("1", sample_ticket()).await.unwrap();

    // Open -> Closed skips the lifecycle
    let err = fx
        .service
        .change_status(ticket.id, TicketStatus::Closed, "2", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TicketError::InvalidTransition {
            from: TicketStatus::Open,
            to: TicketStatus::Closed,
        }
    );
    assert_eq!(fx.history.rows_for(ticket.id).len(), 1); // creation only
}

#[tokio::test]
async fn unknown_ticket_is_not_found() {
    let fx = fixture();
    let id = Uuid::new_v4();

    let err = fx.service.get_ticket(id).await.unwrap_err();
    assert_eq!(err, TicketError::NotFound { id });

    let err = fx.service.ticket_history(id).await.unwrap_err();
    assert_eq!(err, TicketError::NotFound { id });
}

#[tokio::test]
async fn assignment_keeps_single_active_row() {
    let fx = fixture();
    let ticket = fx.service.create_ticket("1", sample_ticket()).await.unwrap();

    fx.service
        .assign_ticket(ticket.id, "agent-a", "admin")
        .await
        .unwrap();
    let second = fx
        .service
        .assign_ticket(ticket.id, "agent-b", "admin")
        .await
        .unwrap();

    assert!(second.active);
    assert_eq!(second.assignee_nik, "agent-b");
    assert_eq!(fx.assignments.active_count(ticket.id), 1);
    assert_eq!(fx.assignments.total_count(ticket.id), 2);

    let updated = fx.service.get_ticket(ticket.id).await.unwrap();
    assert_eq!(updated.assignee_nik.as_deref(), Some("agent-b"));

    // Handover shows up in the audit trail
    let notes: Vec<String> = fx
        .history
        .rows_for(ticket.id)
        .into_iter()
        .filter_map(|h| h.note)
        .collect();
    assert!(notes.iter().any(|n| n.contains("reassigned from agent-a")));
}

#[tokio::test]
async fn reassigning_same_agent_is_a_noop() {
    let fx = fixture();
    let ticket = fx.service.create_ticket("1", sample_ticket()).await.unwrap();

    let first = fx
        .service
        .assign_ticket(ticket.id, "agent-a", "admin")
        .await
        .unwrap();
    let again = fx
        .service
        .assign_ticket(ticket.id, "agent-a", "admin")
        .await
        .unwrap();

    assert_eq!(first.id, again.id);
    assert_eq!(fx.assignments.total_count(ticket.id), 1);
}

#[tokio::test]
async fn terminal_tickets_cannot_be_assigned() {
    let fx = fixture();
    let ticket = fx.service.create_ticket("1", sample_ticket()).await.unwrap();
    fx.service
        .change_status(ticket.id, TicketStatus::Rejected, "admin", None)
        .await
        .unwrap();

    let err = fx
        .service
        .assign_ticket(ticket.id, "agent-a", "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, TicketError::Validation { .. }));
}

#[tokio::test]
async fn list_filters_by_status_and_reporter() {
    let fx = fixture();
    let t1 = fx.service.create_ticket("alice", sample_ticket()).await.unwrap();
    fx.service.create_ticket("bob", sample_ticket()).await.unwrap();
    fx.service
        .change_status(t1.id, TicketStatus::InProgress, "admin", None)
        .await
        .unwrap();

    let (open_only, total) = fx
        .service
        .list_tickets(
            TicketFilter {
                status: Some(TicketStatus::Open),
                ..Default::default()
            },
            None,
            0,
        )
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(open_only[0].reporter_nik, "bob");

    let (alices, _) = fx
        .service
        .list_tickets(
            TicketFilter {
                reporter_nik: Some("alice".to_string()),
                ..Default::default()
            },
            None,
            0,
        )
        .await
        .unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].id, t1.id);
}

#[tokio::test]
async fn auto_close_only_touches_stale_resolved_tickets() {
    let fx = fixture_with_config(TicketingConfig {
        auto_close_after_days: 7,
        ..Default::default()
    });

    let stale = fx.service.create_ticket("1", sample_ticket()).await.unwrap();
    let fresh = fx.service.create_ticket("2", sample_ticket()).await.unwrap();
    let open = fx.service.create_ticket("3", sample_ticket()).await.unwrap();

    for id in [stale.id, fresh.id] {
        fx.service
            .change_status(id, TicketStatus::InProgress, "agent", None)
            .await
            .unwrap();
        fx.service
            .change_status(id, TicketStatus::Resolved, "agent", None)
            .await
            .unwrap();
    }

    // Pretend the first resolution happened ten days ago
    {
        let mut aged = fx.service.get_ticket(stale.id).await.unwrap();
        aged.last_activity_at = Utc::now() - Duration::days(10);
        fx.tickets.update(&aged).await.unwrap();
    }

    let closed = fx.service.auto_close_stale(Utc::now()).await.unwrap();
    assert_eq!(closed, 1);

    let stale_after = fx.service.get_ticket(stale.id).await.unwrap();
    assert_eq!(stale_after.status, TicketStatus::Closed);
    assert!(stale_after.closed_at.is_some());

    assert_eq!(
        fx.service.get_ticket(fresh.id).await.unwrap().status,
        TicketStatus::Resolved
    );
    assert_eq!(
        fx.service.get_ticket(open.id).await.unwrap().status,
        TicketStatus::Open
    );

    // The batch writes a system history row
    let system_rows: Vec<_> = fx
        .history
        .rows_for(stale.id)
        .into_iter()
        .filter(|h| h.changed_by == "system")
        .collect();
    assert_eq!(system_rows.len(), 1);
    assert_eq!(system_rows[0].to_status, TicketStatus::Closed);

    // Second run finds nothing left to close
    assert_eq!(fx.service.auto_close_stale(Utc::now()).await.unwrap(), 0);
}

#[tokio::test]
async fn list_respects_max_page_size() {
    let fx = fixture_with_config(TicketingConfig {
        max_page_size: 2,
        ..Default::default()
    });

    for i in 0..5 {
        let mut input = sample_ticket();
        input.subject = format!("ticket {}", i);
        fx.service.create_ticket("1", input).await.unwrap();
    }

    let (items, total) = fx
        .service
        .list_tickets(TicketFilter::default(), Some(50), 0)
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(total, 5);
}
