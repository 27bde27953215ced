//! SeaORM repository implementation

use super::entity;
use crate::contract::{PayrollInput, PayrollRow, Period};
use crate::domain::repository::PayrollRepository;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

pub struct SeaOrmPayrollRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPayrollRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PayrollRepository for SeaOrmPayrollRepository {
    async fn insert(
        &self,
        nik: &str,
        period: &Period,
        input: &PayrollInput,
    ) -> Result<PayrollRow> {
        use sea_orm::ActiveValue::{NotSet, Set};

        let now = Utc::now();
        let active = entity::ActiveModel {
            id: NotSet,
            nik: Set(nik.to_string()),
            period: Set(period.as_str().to_string()),
            base_salary: Set(input.base_salary),
            allowances: Set(input.allowances),
            deductions: Set(input.deductions),
            net: Set(input.net()),
            published: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find(&self, nik: &str, period: &Period) -> Result<Option<PayrollRow>> {
        let result = entity::Entity::find()
            .filter(entity::Column::Nik.eq(nik))
            .filter(entity::Column::Period.eq(period.as_str()))
            .one(&*self.db)
            .await?;

        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list_period(&self, period: &Period) -> Result<Vec<PayrollRow>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Period.eq(period.as_str()))
            .order_by_asc(entity::Column::Nik)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn update(&self, row: &PayrollRow) -> Result<PayrollRow> {
        let active: entity::ActiveModel = row.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
    }

    async fn publish_period(&self, period: &Period) -> Result<u64> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Published, Expr::value(true))
            .col_expr(entity::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::Column::Period.eq(period.as_str()))
            .filter(entity::Column::Published.eq(false))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
