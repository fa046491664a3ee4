//! Speech use cases.

mod synthesize;

pub use synthesize::{SynthesizeError, SynthesizeSpeechHandler};
