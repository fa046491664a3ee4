//! ElevenLabs text-to-speech adapter.
//!
//! Implements `SpeechSynthesizer` against the ElevenLabs text-to-speech
//! endpoint, returning audio/mpeg bytes. No retry and no caching of
//! previously synthesized audio.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{SpeechSynthesizer, SynthesisError};

/// Configuration for the ElevenLabs adapter.
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    /// API key, absent when synthesis is unconfigured.
    api_key: Option<Secret<String>>,
    /// Voice to synthesize with. Defaults to "Sarah", a friendly female voice.
    pub voice_id: String,
    /// Synthesis model.
    pub model_id: String,
    /// Voice stability setting.
    pub stability: f32,
    /// Voice similarity boost setting.
    pub similarity_boost: f32,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ElevenLabsConfig {
    /// Creates a configuration with the given optional API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()).map(Secret::new),
            voice_id: "EXAVITQu4vr4xnSDxMaL".to_string(),
            model_id: "eleven_monolingual_v1".to_string(),
            stability: 0.5,
            similarity_boost: 0.75,
            base_url: "https://api.elevenlabs.io/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the voice to synthesize with.
    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    /// Sets the synthesis model.
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Sets the voice settings.
    pub fn with_voice_settings(mut self, stability: f32, similarity_boost: f32) -> Self {
        self.stability = stability;
        self.similarity_boost = similarity_boost;
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Returns true if an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// ElevenLabs implementation of the `SpeechSynthesizer` port.
pub struct ElevenLabsSynthesizer {
    config: ElevenLabsConfig,
    client: Client,
}

impl ElevenLabsSynthesizer {
    /// Creates a new synthesizer with the given configuration.
    pub fn new(config: ElevenLabsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn synthesis_url(&self) -> String {
        format!(
            "{}/text-to-speech/{}",
            self.config.base_url, self.config.voice_id
        )
    }

    fn map_transport_error(&self, err: reqwest::Error) -> SynthesisError {
        if err.is_timeout() {
            SynthesisError::Timeout {
                timeout_secs: self.config.timeout.as_secs() as u32,
            }
        } else {
            SynthesisError::network(err.to_string())
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(SynthesisError::NotConfigured)?;

        let body = SpeakRequest {
            text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings {
                stability: self.config.stability,
                similarity_boost: self.config.similarity_boost,
            },
        };

        let response = self
            .client
            .post(self.synthesis_url())
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SynthesisError::unavailable(status.as_u16(), detail));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::network(e.to_string()))?;
        Ok(audio.to_vec())
    }
}

// ----- ElevenLabs wire types -----

#[derive(Debug, Serialize)]
struct SpeakRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}
