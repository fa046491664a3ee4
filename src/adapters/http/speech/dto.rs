//! HTTP DTOs for speech endpoints.

use serde::Deserialize;

/// Request to synthesize reply text as speech.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
}
