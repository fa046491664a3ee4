//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router, handlers, and DTOs. Routers are assembled
//! and nested under `/api` by the binary.

pub mod health;
pub mod negotiation;
pub mod speech;

pub use health::{health_routes, HealthState};
pub use negotiation::{negotiation_routes, NegotiationHandlers};
pub use speech::{speech_routes, SpeechHandlers};

use serde::Serialize;

/// Error body shared by all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error response with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
