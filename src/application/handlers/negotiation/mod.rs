//! Negotiation use cases.

mod handle_turn;
mod reset_session;

pub use handle_turn::{HandleTurnCommand, HandleTurnHandler, NegotiationOutcome, TurnError};
pub use reset_session::ResetSessionHandler;
