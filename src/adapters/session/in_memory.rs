//! In-memory session store implementation.
//!
//! Process-memory only: all transcripts are lost on restart, which is an
//! accepted limitation for this demo. A production deployment would back the
//! `SessionStore` port with a durable keyed store instead.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::negotiation::{Transcript, Turn};
use crate::ports::{SessionStore, TurnGuard};

/// One session's state: its transcript plus the gate that serializes turns.
struct SessionEntry {
    /// Held for the duration of a turn so overlapping turns queue in arrival
    /// order instead of interleaving their appends.
    turn_gate: Arc<tokio::sync::Mutex<()>>,
    transcript: Mutex<Transcript>,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            turn_gate: Arc::new(tokio::sync::Mutex::new(())),
            transcript: Mutex::new(Transcript::new()),
        }
    }
}

/// In-memory implementation of the `SessionStore` port.
///
/// Thread-safe via an internal mutex around the session map, with a
/// per-session async mutex for turn gating. A reset during an in-flight turn
/// detaches that turn's entry: its remaining appends land on the orphaned
/// transcript, and the next reference to the session id starts fresh.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Arc<SessionEntry>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions. Useful for tests.
    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    fn entry(&self, session_id: &str) -> Arc<SessionEntry> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(SessionEntry::new()))
            .clone()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn begin_turn(&self, session_id: &str) -> TurnGuard {
        let gate = self.entry(session_id).turn_gate.clone();
        gate.lock_owned().await
    }

    async fn transcript(&self, session_id: &str) -> Transcript {
        let entry = self.entry(session_id);
        let transcript = entry.transcript.lock().unwrap();
        transcript.clone()
    }

    async fn append(&self, session_id: &str, turn: Turn) {
        let entry = self.entry(session_id);
        let mut transcript = entry.transcript.lock().unwrap();
        transcript.push(turn);
    }

    async fn reset(&self, session_id: &str) {
        self.sessions.lock().unwrap().remove(session_id);
    }
}
