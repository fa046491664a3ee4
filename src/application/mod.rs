//! Application layer - use case handlers wiring domain and ports together.

pub mod handlers;
