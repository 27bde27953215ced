//! Contract models for KTA card requests

use chrono::{DateTime, Utc};

/// Card request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Pending,
    Printed,
    Delivered,
    Rejected,
}

impl CardStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CardStatus::Pending => "pending",
            CardStatus::Printed => "printed",
            CardStatus::Delivered => "delivered",
            CardStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(CardStatus::Pending),
            "printed" => Some(CardStatus::Printed),
            "delivered" => Some(CardStatus::Delivered),
            "rejected" => Some(CardStatus::Rejected),
            _ => None,
        }
    }

    /// Legal forward transitions; Delivered and Rejected are final
    pub fn can_transition_to(self, to: CardStatus) -> bool {
        matches!(
            (self, to),
            (CardStatus::Pending, CardStatus::Printed)
                | (CardStatus::Pending, CardStatus::Rejected)
                | (CardStatus::Printed, CardStatus::Delivered)
        )
    }
}

impl std::fmt::Display for CardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a card is being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRequestType {
    New,
    Replacement,
}

impl CardRequestType {
    pub fn as_str(self) -> &'static str {
        match self {
            CardRequestType::New => "new",
            CardRequestType::Replacement => "replacement",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(CardRequestType::New),
            "replacement" => Some(CardRequestType::Replacement),
            _ => None,
        }
    }
}

/// A KTA card request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    pub id: i64,
    pub nik: String,
    pub request_type: CardRequestType,
    pub reason: String,
    pub status: CardStatus,
    pub processed_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for submitting a card request
#[derive(Debug, Clone)]
pub struct NewCardRequest {
    pub request_type: CardRequestType,
    pub reason: String,
}
