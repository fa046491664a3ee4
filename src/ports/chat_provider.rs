//! Chat provider port - interface for LLM chat completion.
//!
//! Abstracts the chat completion call so the orchestrator never couples to a
//! specific provider API. Completions here are single-shot and non-streaming;
//! a failed call is surfaced as-is with no retry or fallback reply.

use async_trait::async_trait;

use crate::domain::negotiation::Turn;

/// Port for chat completion against an external LLM service.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generates a single completion for the given request.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, ChatError>;
}

/// Request for a chat completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt establishing the persona and rules.
    pub system_prompt: String,
    /// Conversation history in chronological order, current utterance last.
    pub turns: Vec<Turn>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Creates a request with the given system prompt and no history.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            turns: Vec::new(),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Sets the conversation history.
    pub fn with_turns(mut self, turns: impl IntoIterator<Item = Turn>) -> Self {
        self.turns = turns.into_iter().collect();
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A completed reply from the provider.
#[derive(Debug, Clone)]
pub struct CompletionReply {
    /// Generated reply text.
    pub content: String,
    /// Model that generated the reply.
    pub model: String,
}

/// Chat provider errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatError {
    /// API key missing or rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the provider.
    #[error("rate limited by provider")]
    RateLimited,

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider returned a server error.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Upstream error detail.
        message: String,
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

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ChatError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_works() {
        let request = CompletionRequest::new("Be Penny")
            .with_turns([Turn::user("I have a guitar")])
            .with_max_tokens(150)
            .with_temperature(0.8);

        assert_eq!(request.system_prompt, "Be Penny");
        assert_eq!(request.turns.len(), 1);
        assert_eq!(request.max_tokens, Some(150));
        assert_eq!(request.temperature, Some(0.8));
    }

    #[test]
    fn errors_display_upstream_detail() {
        let err = ChatError::unavailable("server error 503");
        assert_eq!(err.to_string(), "provider unavailable: server error 503");

        let err = ChatError::Timeout { timeout_secs: 60 };
        assert_eq!(err.to_string(), "request timed out after 60s");
    }
}
