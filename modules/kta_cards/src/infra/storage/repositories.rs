//! SeaORM repository implementation

use super::entity;
use crate::contract::{CardRequest, CardStatus, NewCardRequest};
use crate::domain::repository::{CardFilter, CardRepository};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

pub struct SeaOrmCardRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCardRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CardRepository for SeaOrmCardRepository {
    async fn insert(&self, nik: &str, request: &NewCardRequest) -> Result<CardRequest> {
        use sea_orm::ActiveValue::{NotSet, Set};

        let now = Utc::now();
        let active = entity::ActiveModel {
            id: NotSet,
            nik: Set(nik.to_string()),
            request_type: Set(request.request_type.as_str().to_string()),
            reason: Set(request.reason.clone()),
            status: Set(CardStatus::Pending.as_str().to_string()),
            processed_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CardRequest>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &CardFilter) -> Result<Vec<CardRequest>> {
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

    async fn update(&self, request: &CardRequest) -> Result<CardRequest> {
        let active: entity::ActiveModel = request.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
    }

    async fn find_open_for_nik(&self, nik: &str) -> Result<Vec<CardRequest>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Nik.eq(nik))
            .filter(
                Condition::any()
                    .add(entity::Column::Status.eq(CardStatus::Pending.as_str()))
                    .add(entity::Column::Status.eq(CardStatus::Printed.as_str())),
            )
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }
}
