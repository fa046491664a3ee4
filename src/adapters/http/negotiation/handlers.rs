//! HTTP handlers for negotiation endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::negotiation::{
    HandleTurnCommand, HandleTurnHandler, ResetSessionHandler, TurnError,
};

use super::dto::{NegotiateRequest, NegotiateResponse, ResetRequest, ResetResponse};

/// Handler state for the negotiation router.
#[derive(Clone)]
pub struct NegotiationHandlers {
    turn_handler: Arc<HandleTurnHandler>,
    reset_handler: Arc<ResetSessionHandler>,
}

impl NegotiationHandlers {
    pub fn new(
        turn_handler: Arc<HandleTurnHandler>,
        reset_handler: Arc<ResetSessionHandler>,
    ) -> Self {
        Self {
            turn_handler,
            reset_handler,
        }
    }
}

/// POST /api/negotiate - process one user utterance
pub async fn negotiate(
    State(handlers): State<NegotiationHandlers>,
    Json(req): Json<NegotiateRequest>,
) -> Response {
    let cmd = HandleTurnCommand::new(req.session_id, req.user_message);

    match handlers.turn_handler.handle(cmd).await {
        Ok(outcome) => {
            let response: NegotiateResponse = outcome.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_turn_error(e),
    }
}

/// POST /api/reset - drop a session's history
pub async fn reset(
    State(handlers): State<NegotiationHandlers>,
    Json(req): Json<ResetRequest>,
) -> Response {
    handlers.reset_handler.handle(&req.session_id).await;
    (StatusCode::OK, Json(ResetResponse { success: true })).into_response()
}

fn handle_turn_error(error: TurnError) -> Response {
    match error {
        TurnError::InvalidInput => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("user_message cannot be empty")),
        )
            .into_response(),
        TurnError::Negotiation(e) => {
            tracing::warn!(error = %e, "negotiation provider call failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ChatError;

    #[test]
    fn invalid_input_maps_to_400() {
        let response = handle_turn_error(TurnError::InvalidInput);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn provider_failure_maps_to_502() {
        let response =
            handle_turn_error(TurnError::Negotiation(ChatError::unavailable("down")));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
