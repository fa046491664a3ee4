//! HandleTurn command handler - the turn orchestrator.
//!
//! One turn: validate the utterance, append it to the session transcript,
//! send the bounded history to the chat provider under the persona prompt,
//! append the reply, then extract negotiation signals from it.
//!
//! A failed provider call leaves the user turn in the transcript with no
//! assistant turn. That is a valid "dangling question" state; resubmitting
//! the same utterance duplicates the user turn, which the caller owns.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::negotiation::{extract_signals, Turn, PENNY_SYSTEM_PROMPT};
use crate::ports::{ChatError, ChatProvider, CompletionRequest, SessionStore};

/// Command to process one user utterance in a session.
#[derive(Debug, Clone)]
pub struct HandleTurnCommand {
    /// Opaque client-generated session key.
    pub session_id: String,
    /// The finalized user utterance.
    pub utterance: String,
}

impl HandleTurnCommand {
    /// Creates a new command.
    pub fn new(session_id: impl Into<String>, utterance: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            utterance: utterance.into(),
        }
    }
}

/// Result of one processed turn. Derived per turn, never stored.
#[derive(Debug, Clone)]
pub struct NegotiationOutcome {
    /// Penny's reply text.
    pub reply_text: String,
    /// First dollar amount mentioned in the reply, if any.
    pub offer_amount: Option<u64>,
    /// Whether the reply signals a closed deal.
    pub deal_reached: bool,
}

/// Errors that can occur when processing a turn.
#[derive(Debug, Error)]
pub enum TurnError {
    /// Utterance was empty or whitespace only. No state was mutated.
    #[error("utterance cannot be empty")]
    InvalidInput,

    /// The chat provider failed. The user turn remains in the transcript.
    #[error("negotiation provider failed: {0}")]
    Negotiation(#[from] ChatError),
}

/// Orchestrates one negotiation turn per invocation.
pub struct HandleTurnHandler {
    store: Arc<dyn SessionStore>,
    provider: Arc<dyn ChatProvider>,
    temperature: f32,
    max_tokens: u32,
}

impl HandleTurnHandler {
    /// Creates a new handler with the injected store and provider.
    pub fn new(
        store: Arc<dyn SessionStore>,
        provider: Arc<dyn ChatProvider>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            store,
            provider,
            temperature,
            max_tokens,
        }
    }

    /// Processes one turn.
    pub async fn handle(&self, cmd: HandleTurnCommand) -> Result<NegotiationOutcome, TurnError> {
        if cmd.utterance.trim().is_empty() {
            return Err(TurnError::InvalidInput);
        }

        // Serializes with any in-flight turn on the same session.
        let _gate = self.store.begin_turn(&cmd.session_id).await;

        self.store
            .append(&cmd.session_id, Turn::user(cmd.utterance.clone()))
            .await;
        let transcript = self.store.transcript(&cmd.session_id).await;

        let request = CompletionRequest::new(PENNY_SYSTEM_PROMPT)
            .with_turns(transcript)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        let reply = self.provider.complete(request).await?;

        self.store
            .append(&cmd.session_id, Turn::assistant(reply.content.clone()))
            .await;

        let signals = extract_signals(&reply.content);
        tracing::debug!(
            session_id = %cmd.session_id,
            offer_amount = ?signals.offer_amount,
            deal_reached = signals.deal_reached,
            model = %reply.model,
            "negotiation turn completed"
        );

        Ok(NegotiationOutcome {
            reply_text: reply.content,
            offer_amount: signals.offer_amount,
            deal_reached: signals.deal_reached,
        })
    }
}
