//! HTTP routes for speech endpoints.

use axum::{routing::post, Router};

use super::handlers::{speak, SpeechHandlers};

/// Creates the speech router.
pub fn speech_routes(handlers: SpeechHandlers) -> Router {
    Router::new()
        .route("/speak", post(speak))
        .with_state(handlers)
}
