//! HTTP adapter for speech endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SpeechHandlers;
pub use routes::speech_routes;
