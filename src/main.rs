//! Penny backend binary.
//!
//! Loads configuration, wires adapters into the use case handlers, and
//! serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use penny_backend::adapters::ai::{OpenAiChatConfig, OpenAiChatProvider};
use penny_backend::adapters::http::{
    health_routes, negotiation_routes, speech_routes, HealthState, NegotiationHandlers,
    SpeechHandlers,
};
use penny_backend::adapters::session::InMemorySessionStore;
use penny_backend::adapters::speech::{ElevenLabsConfig, ElevenLabsSynthesizer};
use penny_backend::application::handlers::negotiation::{HandleTurnHandler, ResetSessionHandler};
use penny_backend::application::handlers::speech::SynthesizeSpeechHandler;
use penny_backend::config::{AppConfig, ServerConfig};
use penny_backend::ports::{ChatProvider, SessionStore, SpeechSynthesizer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let chat_config = OpenAiChatConfig::new(config.ai.openai_api_key.clone().unwrap_or_default())
        .with_model(config.ai.model.clone())
        .with_timeout(config.ai.timeout());
    let provider: Arc<dyn ChatProvider> = Arc::new(OpenAiChatProvider::new(chat_config));

    let mut speech_config = ElevenLabsConfig::new(config.speech.elevenlabs_api_key.clone())
        .with_voice_id(config.speech.voice_id.clone())
        .with_model_id(config.speech.model_id.clone())
        .with_voice_settings(config.speech.stability, config.speech.similarity_boost);
    speech_config.timeout = config.speech.timeout();
    let synthesizer: Arc<dyn SpeechSynthesizer> =
        Arc::new(ElevenLabsSynthesizer::new(speech_config));

    let turn_handler = Arc::new(HandleTurnHandler::new(
        store.clone(),
        provider,
        config.ai.temperature,
        config.ai.max_tokens,
    ));
    let reset_handler = Arc::new(ResetSessionHandler::new(store));
    let synthesize_handler = Arc::new(SynthesizeSpeechHandler::new(synthesizer));

    let health_state = HealthState {
        negotiation_configured: config.ai.has_api_key(),
        synthesis_configured: config.speech.has_api_key(),
    };

    let api = negotiation_routes(NegotiationHandlers::new(turn_handler, reset_handler))
        .merge(speech_routes(SpeechHandlers::new(synthesize_handler)))
        .merge(health_routes(health_state));

    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        negotiation_configured = health_state.negotiation_configured,
        synthesis_configured = health_state.synthesis_configured,
        "penny backend listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        // Demo default: the frontend may be served from anywhere.
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
