//! Contract layer - transport-agnostic models and errors

pub mod error;
pub mod model;

pub use error::CardError;
pub use model::{CardRequest, CardRequestType, CardStatus, NewCardRequest};
