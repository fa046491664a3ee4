//! SynthesizeSpeech command handler.
//!
//! Thin boundary over the synthesizer port: the reply text goes out
//! verbatim and the audio bytes come back untouched.

use std::sync::Arc;
use thiserror::Error;

use crate::ports::{SpeechSynthesizer, SynthesisError};

/// Errors that can occur when synthesizing speech.
#[derive(Debug, Error)]
pub enum SynthesizeError {
    /// Text was empty or whitespace only.
    #[error("text cannot be empty")]
    InvalidInput,

    /// The synthesis service failed.
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

/// Synthesizes reply text into audio.
pub struct SynthesizeSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SynthesizeSpeechHandler {
    /// Creates a new handler.
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    /// Synthesizes the given text into audio/mpeg bytes.
    pub async fn handle(&self, text: &str) -> Result<Vec<u8>, SynthesizeError> {
        if text.trim().is_empty() {
            return Err(SynthesizeError::InvalidInput);
        }

        let audio = self.synthesizer.synthesize(text).await?;
        tracing::debug!(bytes = audio.len(), "speech synthesized");
        Ok(audio)
    }
}
