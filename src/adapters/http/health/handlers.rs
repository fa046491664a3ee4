//! HTTP handler for the health endpoint.
//!
//! Reports whether the external service credentials are present. Presence
//! only: the keys are never validated against the upstream services.

use axum::{extract::State, Json};
use serde::Serialize;

/// Credential presence flags, computed once at startup.
#[derive(Debug, Clone, Copy)]
pub struct HealthState {
    pub negotiation_configured: bool,
    pub synthesis_configured: bool,
}

/// Health check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub negotiation_configured: bool,
    pub synthesis_configured: bool,
}

/// GET /api/health - service liveness and credential presence
pub async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        negotiation_configured: state.negotiation_configured,
        synthesis_configured: state.synthesis_configured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_credential_presence() {
        let state = HealthState {
            negotiation_configured: true,
            synthesis_configured: false,
        };

        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert!(body.negotiation_configured);
        assert!(!body.synthesis_configured);
        assert!(!body.timestamp.is_empty());
    }

    #[test]
    fn health_response_serializes_expected_fields() {
        let body = HealthResponse {
            status: "ok",
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            negotiation_configured: true,
            synthesis_configured: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["negotiation_configured"], true);
        assert_eq!(json["synthesis_configured"], true);
    }
}
