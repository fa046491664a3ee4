//! Conversation transcript for a negotiation session.
//!
//! A transcript is the ordered sequence of user/assistant turns for one
//! session. It is size-bounded: only the most recent turns are retained so
//! the context sent to the chat provider stays within token limits.

use serde::{Deserialize, Serialize};

/// Maximum number of turns retained in a transcript.
///
/// Older turns are silently discarded; this bounds prompt size, nothing more.
pub const MAX_TRANSCRIPT_TURNS: usize = 20;

/// Role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The customer trying to sell an item.
    User,
    /// Penny's reply.
    Assistant,
}

/// A single message within a negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who authored this turn.
    pub role: Role,
    /// The spoken/generated text.
    pub content: String,
}

impl Turn {
    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered, size-bounded sequence of turns for one session.
///
/// # Invariants
///
/// - After any [`push`](Transcript::push), `len() <= MAX_TRANSCRIPT_TURNS`.
/// - Retained turns are always the most recent ones, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn, discarding the oldest turns beyond the cap.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
        if self.turns.len() > MAX_TRANSCRIPT_TURNS {
            let excess = self.turns.len() - MAX_TRANSCRIPT_TURNS;
            self.turns.drain(..excess);
        }
    }

    /// Returns the retained turns in chronological order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of retained turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl IntoIterator for Transcript {
    type Item = Turn;
    type IntoIter = std::vec::IntoIter<Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_transcript() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("I have a guitar"));
        transcript.push(Turn::assistant("I can offer $20"));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0].role, Role::User);
        assert_eq!(transcript.turns()[0].content, "I have a guitar");
        assert_eq!(transcript.turns()[1].role, Role::Assistant);
    }

    #[test]
    fn push_beyond_cap_drops_oldest() {
        let mut transcript = Transcript::new();
        for i in 0..MAX_TRANSCRIPT_TURNS + 5 {
            transcript.push(Turn::user(format!("turn {}", i)));
        }

        assert_eq!(transcript.len(), MAX_TRANSCRIPT_TURNS);
        // The first retained turn is the one pushed right after the overflow.
        assert_eq!(transcript.turns()[0].content, "turn 5");
        assert_eq!(
            transcript.turns().last().unwrap().content,
            format!("turn {}", MAX_TRANSCRIPT_TURNS + 4)
        );
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    proptest! {
        #[test]
        fn cap_holds_for_any_append_sequence(contents in prop::collection::vec(".{0,16}", 0..64)) {
            let mut transcript = Transcript::new();
            for content in &contents {
                transcript.push(Turn::user(content.clone()));
            }

            prop_assert!(transcript.len() <= MAX_TRANSCRIPT_TURNS);

            // Retained turns are the suffix of the input, in original order.
            let expected_start = contents.len().saturating_sub(MAX_TRANSCRIPT_TURNS);
            let retained: Vec<&str> = transcript.turns().iter().map(|t| t.content.as_str()).collect();
            let expected: Vec<&str> = contents[expected_start..].iter().map(|s| s.as_str()).collect();
            prop_assert_eq!(retained, expected);
        }
    }
}
