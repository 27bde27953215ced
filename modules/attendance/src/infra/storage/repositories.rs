//! SeaORM repository implementation

use super::entity;
use crate::contract::AttendanceRecord;
use crate::domain::repository::{AttendanceRepository, NewAttendanceRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

pub struct SeaOrmAttendanceRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAttendanceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendanceRepository for SeaOrmAttendanceRepository {
    async fn insert(&self, record: &NewAttendanceRecord) -> Result<AttendanceRecord> {
        use sea_orm::ActiveValue::{NotSet, Set};

        let active = entity::ActiveModel {
            id: NotSet,
            nik: Set(record.nik.clone()),
            date: Set(record.date),
            check_in: Set(record.check_in),
            check_out: Set(None),
            status: Set(record.status.as_str().to_string()),
            note: Set(record.note.clone()),
        };

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find_by_nik_and_date(
        &self,
        nik: &str,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>> {
        let result = entity::Entity::find()
            .filter(entity::Column::Nik.eq(nik))
            .filter(entity::Column::Date.eq(date))
            .one(&*self.db)
            .await?;

        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn update(&self, record: &AttendanceRecord) -> Result<AttendanceRecord> {
        let active: entity::ActiveModel = record.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
    }

    async fn list_range(
        &self,
        nik: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Nik.eq(nik))
            .filter(entity::Column::Date.gte(from))
            .filter(entity::Column::Date.lte(to))
            .order_by_asc(entity::Column::Date)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }
}
