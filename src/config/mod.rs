//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `PENNY` prefix
//! and `__` (double underscore) separating nested sections.
//!
//! # Example
//!
//! ```no_run
//! use penny_backend::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;
mod speech;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;
pub use speech::SpeechConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working defaults; the only values a deployment must
/// supply are the external API keys, and even those are optional (the
/// health endpoint reports their absence).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat provider configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Speech synthesis configuration (ElevenLabs)
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment variables with
    /// the `PENNY` prefix:
    ///
    /// - `PENNY__SERVER__PORT=3001` -> `server.port = 3001`
    /// - `PENNY__AI__OPENAI_API_KEY=sk-...` -> `ai.openai_api_key`
    /// - `PENNY__SPEECH__ELEVENLABS_API_KEY=...` -> `speech.elevenlabs_api_key`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("PENNY").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.speech.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("PENNY__SERVER__PORT");
        env::remove_var("PENNY__AI__OPENAI_API_KEY");
        env::remove_var("PENNY__SPEECH__ELEVENLABS_API_KEY");
    }

    #[test]
    fn test_load_with_no_env_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().expect("load should succeed with defaults");

        assert_eq!(config.server.port, 3001);
        assert!(!config.ai.has_api_key());
        assert!(!config.speech.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PENNY__SERVER__PORT", "8080");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_api_keys_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PENNY__AI__OPENAI_API_KEY", "sk-test");
        env::set_var("PENNY__SPEECH__ELEVENLABS_API_KEY", "xi-test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_api_key());
        assert!(config.speech.has_api_key());
    }
}
