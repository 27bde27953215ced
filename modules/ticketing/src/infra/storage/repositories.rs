//! SeaORM repository implementations

use crate::contract::{Assignment, StatusChange, Ticket, TicketFilter, TicketStatus};
use crate::domain::repository::{
    AssignmentRepository, HistoryRepository, NewAssignment, NewStatusChange, TicketRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    prelude::Expr, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

fn apply_filter(
    mut query: sea_orm::Select<entity::Entity>,
    filter: &TicketFilter,
) -> sea_orm::Select<entity::Entity> {
    if let Some(status) = filter.status {
        query = query.filter(entity::Column::Status.eq(status.as_str()));
    }
    if let Some(assignee) = &filter.assignee_nik {
        query = query.filter(entity::Column::AssigneeNik.eq(assignee));
    }
    if let Some(reporter) = &filter.reporter_nik {
        query = query.filter(entity::Column::ReporterNik.eq(reporter));
    }
    query
}

// ===== Ticket Repository =====

pub struct SeaOrmTicketRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTicketRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketRepository for SeaOrmTicketRepository {
    async fn insert(&self, ticket: &Ticket) -> Result<Ticket> {
        let active: entity::ActiveModel = ticket.into();
        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;
        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &TicketFilter, limit: u64, offset: u64) -> Result<Vec<Ticket>> {
        let results = apply_filter(entity::Entity::find(), filter)
            .order_by_desc(entity::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn count(&self, filter: &TicketFilter) -> Result<u64> {
        let count = apply_filter(entity::Entity::find(), filter)
            .count(&*self.db)
            .await?;
        Ok(count)
    }

    async fn update(&self, ticket: &Ticket) -> Result<Ticket> {
        let active: entity::ActiveModel = ticket.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
    }

    async fn find_stale_resolved(&self, cutoff: DateTime<Utc>) -> Result<Vec<Ticket>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Status.eq(TicketStatus::Resolved.as_str()))
            .filter(entity::Column::LastActivityAt.lt(cutoff))
            .order_by_asc(entity::Column::LastActivityAt)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }
}

// ===== History Repository =====

pub struct SeaOrmHistoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmHistoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryRepository for SeaOrmHistoryRepository {
    async fn append(&self, change: &NewStatusChange) -> Result<StatusChange> {
        use sea_orm::ActiveValue::{NotSet, Set};

        let active = entity::history::ActiveModel {
            id: NotSet,
            ticket_id: Set(change.ticket_id),
            from_status: Set(change.from_status.map(|s| s.as_str().to_string())),
            to_status: Set(change.to_status.as_str().to_string()),
            changed_by: Set(change.changed_by.clone()),
            note: Set(change.note.clone()),
            changed_at: Set(Utc::now()),
        };

        let result = entity::history::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn for_ticket(&self, ticket_id: Uuid) -> Result<Vec<StatusChange>> {
        let results = entity::history::Entity::find()
            .filter(entity::history::Column::TicketId.eq(ticket_id))
            .order_by_asc(entity::history::Column::ChangedAt)
            .order_by_asc(entity::history::Column::Id)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }
}

// ===== Assignment Repository =====

pub struct SeaOrmAssignmentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAssignmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssignmentRepository for SeaOrmAssignmentRepository {
    async fn active_for_ticket(&self, ticket_id: Uuid) -> Result<Option<Assignment>> {
        let result = entity::assignment::Entity::find()
            .filter(entity::assignment::Column::TicketId.eq(ticket_id))
            .filter(entity::assignment::Column::Active.eq(true))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn deactivate_for_ticket(&self, ticket_id: Uuid) -> Result<()> {
        entity::assignment::Entity::update_many()
            .col_expr(entity::assignment::Column::Active, Expr::value(false))
            .filter(entity::assignment::Column::TicketId.eq(ticket_id))
            .filter(entity::assignment::Column::Active.eq(true))
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    async fn insert_active(&self, assignment: &NewAssignment) -> Result<Assignment> {
        use sea_orm::ActiveValue::{NotSet, Set};

        let active = entity::assignment::ActiveModel {
            id: NotSet,
            ticket_id: Set(assignment.ticket_id),
            assignee_nik: Set(assignment.assignee_nik.clone()),
            assigned_by: Set(assignment.assigned_by.clone()),
            active: Set(true),
            assigned_at: Set(Utc::now()),
        };

        let result = entity::assignment::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(result.into())
    }
}
