//! HTTP handlers for speech endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::speech::{SynthesizeError, SynthesizeSpeechHandler};

use super::dto::SpeakRequest;

/// Handler state for the speech router.
#[derive(Clone)]
pub struct SpeechHandlers {
    synthesize_handler: Arc<SynthesizeSpeechHandler>,
}

impl SpeechHandlers {
    pub fn new(synthesize_handler: Arc<SynthesizeSpeechHandler>) -> Self {
        Self { synthesize_handler }
    }
}

/// POST /api/speak - synthesize reply text as audio/mpeg
pub async fn speak(
    State(handlers): State<SpeechHandlers>,
    Json(req): Json<SpeakRequest>,
) -> Response {
    match handlers.synthesize_handler.handle(&req.text).await {
        Ok(audio) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "audio/mpeg")],
            audio,
        )
            .into_response(),
        Err(e) => handle_synthesize_error(e),
    }
}

fn handle_synthesize_error(error: SynthesizeError) -> Response {
    match error {
        SynthesizeError::InvalidInput => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("text cannot be empty")),
        )
            .into_response(),
        SynthesizeError::Synthesis(e) => {
            tracing::warn!(error = %e, "speech synthesis call failed");
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
    use crate::ports::SynthesisError;

    #[test]
    fn invalid_input_maps_to_400() {
        let response = handle_synthesize_error(SynthesizeError::InvalidInput);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failure_maps_to_502() {
        let response = handle_synthesize_error(SynthesizeError::Synthesis(
            SynthesisError::unavailable(500, "voice exploded"),
        ));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn missing_key_maps_to_502() {
        let response =
            handle_synthesize_error(SynthesizeError::Synthesis(SynthesisError::NotConfigured));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
