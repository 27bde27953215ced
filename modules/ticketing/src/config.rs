//! Configuration for the ticketing module

use serde::Deserialize;

/// Ticketing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketingConfig {
    /// Resolved tickets with no activity for this many days are auto-closed
    #[serde(default = "default_auto_close_after_days")]
    pub auto_close_after_days: u32,

    /// Default page size for list endpoints
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Upper bound for the `limit` query parameter
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for TicketingConfig {
    fn default() -> Self {
        Self {
            auto_close_after_days: default_auto_close_after_days(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_auto_close_after_days() -> u32 {
    7
}

fn default_page_size() -> u64 {
    25
}

fn default_max_page_size() -> u64 {
    100
}
