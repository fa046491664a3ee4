//! ResetSession command handler.
//!
//! Drops a session's transcript so the next utterance starts a fresh
//! negotiation. Always succeeds; resetting an unknown session is a no-op.

use std::sync::Arc;

use crate::ports::SessionStore;

/// Resets negotiation sessions.
pub struct ResetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl ResetSessionHandler {
    /// Creates a new handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Removes the session entirely.
    pub async fn handle(&self, session_id: &str) {
        self.store.reset(session_id).await;
        tracing::debug!(session_id = %session_id, "session reset");
    }
}
