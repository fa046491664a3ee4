//! HTTP DTOs for negotiation endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::negotiation::NegotiationOutcome;

/// Session id used when the client does not supply one.
pub fn default_session_id() -> String {
    "default".to_string()
}

/// Request to process one user utterance.
#[derive(Debug, Clone, Deserialize)]
pub struct NegotiateRequest {
    pub user_message: String,
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

/// One processed turn: Penny's reply plus the extracted signals.
#[derive(Debug, Clone, Serialize)]
pub struct NegotiateResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_amount: Option<u64>,
    pub deal_reached: bool,
}

impl From<NegotiationOutcome> for NegotiateResponse {
    fn from(outcome: NegotiationOutcome) -> Self {
        Self {
            reply: outcome.reply_text,
            offer_amount: outcome.offer_amount,
            deal_reached: outcome.deal_reached,
        }
    }
}

/// Request to reset a session.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetRequest {
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

/// Reset acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn negotiate_request_defaults_the_session_id() {
        let req: NegotiateRequest =
            serde_json::from_value(json!({ "user_message": "hi" })).unwrap();
        assert_eq!(req.session_id, "default");
        assert_eq!(req.user_message, "hi");
    }

    #[test]
    fn negotiate_response_omits_absent_offer() {
        let response = NegotiateResponse {
            reply: "Let's talk".to_string(),
            offer_amount: None,
            deal_reached: false,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("offer_amount").is_none());
        assert_eq!(json["deal_reached"], false);
    }

    #[test]
    fn reset_request_defaults_the_session_id() {
        let req: ResetRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.session_id, "default");
    }
}
