//! Speech synthesizer port - interface for text-to-speech.
//!
//! The reply text is passed verbatim; there is no truncation, caching, or
//! fallback to silent mode. Upstream failures surface to the caller.

use async_trait::async_trait;

/// Port for synthesizing speech from text.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesizes the given text into audio bytes (audio/mpeg).
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError>;
}

/// Speech synthesis errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthesisError {
    /// No API key configured for the synthesis service.
    #[error("speech synthesis is not configured")]
    NotConfigured,

    /// Non-success status from the synthesis service.
    #[error("synthesis service returned {status}: {detail}")]
    Unavailable {
        /// HTTP status from the upstream service.
        status: u16,
        /// Upstream error detail.
        detail: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl SynthesisError {
    /// Creates an unavailable error.
    pub fn unavailable(status: u16, detail: impl Into<String>) -> Self {
        Self::Unavailable {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}
