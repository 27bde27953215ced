//! Domain service - card request lifecycle

use super::repository::{CardFilter, CardRepository};
use crate::contract::{CardError, CardRequest, CardStatus, NewCardRequest};
use chrono::Utc;
use std::sync::Arc;

/// Domain service for KTA card requests
pub struct Service {
    cards: Arc<dyn CardRepository>,
}

impl Service {
    pub fn new(cards: Arc<dyn CardRepository>) -> Self {
        Self { cards }
    }

    /// Submit a card request for an employee
    ///
    /// At most one open (Pending or Printed) request per employee.
    pub async fn submit(
        &self,
        nik: &str,
        input: NewCardRequest,
    ) -> Result<CardRequest, CardError> {
        if input.reason.trim().is_empty() {
            return Err(CardError::Validation {
                message: "reason must not be empty".to_string(),
            });
        }

        let open = self
            .cards
            .find_open_for_nik(nik)
            .await
            .map_err(|e| internal("find open card requests", e))?;
        if !open.is_empty() {
            return Err(CardError::AlreadyOpen {
                nik: nik.to_string(),
            });
        }

        let request = self
            .cards
            .insert(nik, &input)
            .await
            .map_err(|e| internal("insert card request", e))?;

        tracing::info!(nik, id = request.id, "card request submitted");
        Ok(request)
    }

    /// Get one card request
    pub async fn get(&self, id: i64) -> Result<CardRequest, CardError> {
        self.cards
            .find_by_id(id)
            .await
            .map_err(|e| internal("find card request", e))?
            .ok_or(CardError::NotFound { id })
    }

    /// List card requests
    pub async fn list(&self, filter: CardFilter) -> Result<Vec<CardRequest>, CardError> {
        self.cards
            .list(&filter)
            .await
            .map_err(|e| internal("list card requests", e))
    }

    /// Move a request along the lifecycle; stamps the processor
    pub async fn change_status(
        &self,
        id: i64,
        to: CardStatus,
        processed_by: &str,
    ) -> Result<CardRequest, CardError> {
        let mut request = self.get(id).await?;

        if !request.status.can_transition_to(to) {
            return Err(CardError::IllegalTransition {
                from: request.status,
                to,
            });
        }

        request.status = to;
        request.processed_by = Some(processed_by.to_string());
        request.updated_at = Utc::now();

        let updated = self
            .cards
            .update(&request)
            .await
            .map_err(|e| internal("update card request", e))?;

        tracing::info!(id, status = %to, processed_by, "card request updated");
        Ok(updated)
    }
}

fn internal(context: &str, error: anyhow::Error) -> CardError {
    tracing::error!("{}: {:?}", context, error);
    CardError::Internal
}
