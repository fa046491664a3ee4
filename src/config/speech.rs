//! Speech synthesis configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Speech synthesis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// ElevenLabs API key
    pub elevenlabs_api_key: Option<String>,

    /// Voice to synthesize with
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// Synthesis model
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Voice stability setting
    #[serde(default = "default_stability")]
    pub stability: f32,

    /// Voice similarity boost setting
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SpeechConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an ElevenLabs key is present
    pub fn has_api_key(&self) -> bool {
        self.elevenlabs_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Validate speech configuration
    ///
    /// As with the chat key, a missing key is allowed; synthesis requests
    /// then fail upstream rather than the service refusing to boot.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.stability) || !(0.0..=1.0).contains(&self.similarity_boost)
        {
            return Err(ValidationError::InvalidVoiceSettings);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            elevenlabs_api_key: None,
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_voice_id() -> String {
    "EXAVITQu4vr4xnSDxMaL".to_string()
}

fn default_model_id() -> String {
    "eleven_monolingual_v1".to_string()
}

fn default_stability() -> f32 {
    0.5
}

fn default_similarity_boost() -> f32 {
    0.75
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_config_defaults() {
        let config = SpeechConfig::default();
        assert_eq!(config.voice_id, "EXAVITQu4vr4xnSDxMaL");
        assert_eq!(config.model_id, "eleven_monolingual_v1");
        assert!(!config.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_out_of_range_settings() {
        let config = SpeechConfig {
            stability: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SpeechConfig {
            similarity_boost: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_has_api_key() {
        let config = SpeechConfig {
            elevenlabs_api_key: Some("xi-xxx".to_string()),
            ..Default::default()
        };
        assert!(config.has_api_key());
    }
}
