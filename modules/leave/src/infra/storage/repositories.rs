//! SeaORM repository implementations

use super::entity;
use crate::contract::{LeaveRequest, NewLeaveRequest, NewShiftSwap, RequestStatus, ShiftSwap};
use crate::domain::repository::{LeaveRepository, RequestFilter, ShiftSwapRepository};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

pub struct SeaOrmLeaveRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmLeaveRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeaveRepository for SeaOrmLeaveRepository {
    async fn insert(&self, nik: &str, request: &NewLeaveRequest) -> Result<LeaveRequest> {
        use sea_orm::ActiveValue::{NotSet, Set};

        let active = entity::ActiveModel {
            id: NotSet,
            nik: Set(nik.to_string()),
            leave_type: Set(request.leave_type.as_str().to_string()),
            start_date: Set(request.start_date),
            end_date: Set(request.end_date),
            reason: Set(request.reason.clone()),
            status: Set(RequestStatus::Pending.as_str().to_string()),
            decided_by: Set(None),
            decided_at: Set(None),
            decision_note: Set(None),
            created_at: Set(Utc::now()),
        };

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<LeaveRequest>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &RequestFilter) -> Result<Vec<LeaveRequest>> {
        let mut query = entity::Entity::find();
        if let Some(nik) = &filter.nik {
            query = query.filter(entity::Column::Nik.eq(nik));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::Column::Status.eq(status.as_str()));
        }

        let results = query
            .order_by_desc(entity::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn update(&self, request: &LeaveRequest) -> Result<LeaveRequest> {
        let active: entity::ActiveModel = request.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
    }

    async fn find_overlapping(
        &self,
        nik: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaveRequest>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Nik.eq(nik))
            .filter(
                Condition::any()
                    .add(entity::Column::Status.eq(RequestStatus::Pending.as_str()))
                    .add(entity::Column::Status.eq(RequestStatus::Approved.as_str())),
            )
            .filter(entity::Column::StartDate.lte(end))
            .filter(entity::Column::EndDate.gte(start))
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }
}

pub struct SeaOrmShiftSwapRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmShiftSwapRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShiftSwapRepository for SeaOrmShiftSwapRepository {
    async fn insert(&self, requester_nik: &str, swap: &NewShiftSwap) -> Result<ShiftSwap> {
        use sea_orm::ActiveValue::{NotSet, Set};

        let active = entity::shift_swap::ActiveModel {
            id: NotSet,
            requester_nik: Set(requester_nik.to_string()),
            counterpart_nik: Set(swap.counterpart_nik.clone()),
            own_shift_date: Set(swap.own_shift_date),
            counterpart_shift_date: Set(swap.counterpart_shift_date),
            reason: Set(swap.reason.clone()),
            status: Set(RequestStatus::Pending.as_str().to_string()),
            decided_by: Set(None),
            decided_at: Set(None),
            created_at: Set(Utc::now()),
        };

        let result = entity::shift_swap::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShiftSwap>> {
        let result = entity::shift_swap::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;

        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &RequestFilter) -> Result<Vec<ShiftSwap>> {
        let mut query = entity::shift_swap::Entity::find();
        if let Some(nik) = &filter.nik {
            query = query.filter(
                Condition::any()
                    .add(entity::shift_swap::Column::RequesterNik.eq(nik))
                    .add(entity::shift_swap::Column::CounterpartNik.eq(nik)),
            );
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::shift_swap::Column::Status.eq(status.as_str()));
        }

        let results = query
            .order_by_desc(entity::shift_swap::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn update(&self, swap: &ShiftSwap) -> Result<ShiftSwap> {
        let active: entity::shift_swap::ActiveModel = swap.into();
        let result = entity::shift_swap::Entity::update(active)
            .exec(&*self.db)
            .await?;
        result.try_into()
    }
}
