//! Speech synthesis adapters.

mod elevenlabs;

pub use elevenlabs::{ElevenLabsConfig, ElevenLabsSynthesizer};
