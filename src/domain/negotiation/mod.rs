//! Negotiation domain - transcripts, extracted signals, and the persona.

mod persona;
mod signals;
mod transcript;

pub use persona::PENNY_SYSTEM_PROMPT;
pub use signals::{extract_signals, NegotiationSignals};
pub use transcript::{Role, Transcript, Turn, MAX_TRANSCRIPT_TURNS};
