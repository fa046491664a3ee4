//! Session store port - keyed transcript storage.
//!
//! Sessions are identified by an opaque, client-generated string key and are
//! created implicitly on first reference. All operations are infallible:
//! there is no "session not found" condition, and resetting an unknown
//! session is a no-op.

use async_trait::async_trait;

use crate::domain::negotiation::{Transcript, Turn};

/// Guard serializing turns for one session.
///
/// Held across a whole turn, provider call included, so overlapping turns on
/// the same session id queue rather than race on append order. Distinct
/// sessions are unaffected by each other's guards.
pub type TurnGuard = tokio::sync::OwnedMutexGuard<()>;

/// Port for per-session transcript storage.
///
/// The store exclusively owns all transcripts; callers only ever receive
/// snapshots. A durable keyed implementation can replace the in-memory one
/// without changing the orchestrator.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Acquires the turn gate for a session, creating the session if absent.
    async fn begin_turn(&self, session_id: &str) -> TurnGuard;

    /// Returns a snapshot of the session's transcript, creating the session
    /// if absent.
    async fn transcript(&self, session_id: &str) -> Transcript;

    /// Appends a turn to the session's transcript (creating the session if
    /// absent), then truncates to the retained-turn cap.
    async fn append(&self, session_id: &str, turn: Turn);

    /// Removes the session entirely. Idempotent.
    async fn reset(&self, session_id: &str);
}
