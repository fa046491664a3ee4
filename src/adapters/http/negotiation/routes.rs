//! HTTP routes for negotiation endpoints.

use axum::{routing::post, Router};

use super::handlers::{negotiate, reset, NegotiationHandlers};

/// Creates the negotiation router.
pub fn negotiation_routes(handlers: NegotiationHandlers) -> Router {
    Router::new()
        .route("/negotiate", post(negotiate))
        .route("/reset", post(reset))
        .with_state(handlers)
}
