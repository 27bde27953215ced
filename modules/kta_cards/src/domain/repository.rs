//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{CardRequest, CardStatus, NewCardRequest};
use anyhow::Result;
use async_trait::async_trait;

/// Filters for listing card requests
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    pub nik: Option<String>,
    pub status: Option<CardStatus>,
}

/// Repository for card requests
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Insert a Pending request for an employee
    async fn insert(&self, nik: &str, request: &NewCardRequest) -> Result<CardRequest>;

    /// Find a request by id
    async fn find_by_id(&self, id: i64) -> Result<Option<CardRequest>>;

    /// List requests matching the filter, newest first
    async fn list(&self, filter: &CardFilter) -> Result<Vec<CardRequest>>;

    /// Persist changes to an existing request
    async fn update(&self, request: &CardRequest) -> Result<CardRequest>;

    /// Pending or Printed requests of an employee
    async fn find_open_for_nik(&self, nik: &str) -> Result<Vec<CardRequest>>;
}
