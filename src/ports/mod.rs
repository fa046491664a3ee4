//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! negotiation core and the outside world. Adapters implement these ports.
//!
//! - `ChatProvider` - chat completion against an LLM service
//! - `SpeechSynthesizer` - text to audio against a TTS service
//! - `SessionStore` - keyed transcript storage with per-session turn gating

mod chat_provider;
mod session_store;
mod speech_synthesizer;

pub use chat_provider::{ChatError, ChatProvider, CompletionReply, CompletionRequest};
pub use session_store::{SessionStore, TurnGuard};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
