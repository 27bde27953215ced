//! Ticketing Module
//!
//! Helpdesk tickets for the workforce server. Tickets move through a fixed
//! lifecycle (Open → InProgress → Resolved → Closed, with Rejected as a
//! second terminal state); every transition is appended to a status history
//! table and assignments keep at most one active row per ticket. A batch
//! operation closes Resolved tickets that have gone quiet.

// Public exports
pub mod contract;
pub use contract::{
    error::TicketError, Assignment, NewTicket, Priority, StatusChange, Ticket, TicketFilter,
    TicketStatus,
};

pub mod config;
pub use config::TicketingConfig;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
