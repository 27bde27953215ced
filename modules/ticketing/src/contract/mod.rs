//! Contract layer - transport-agnostic models and errors

pub mod error;
pub mod model;

pub use error::TicketError;
pub use model::{
    Assignment, NewTicket, Priority, StatusChange, Ticket, TicketFilter, TicketStatus,
};
