//! Server entry point - wires configuration, adapters, and the HTTP router.

use std::process;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sama_wellness::adapters::ai::{MockLlmProvider, OpenAiConfig, OpenAiProvider};
use sama_wellness::adapters::emotion::KeywordEmotionAnalyzer;
use sama_wellness::adapters::http::{app_router, CheckinHandlers, OnboardingHandlers};
use sama_wellness::adapters::memory::{
    InMemoryConversationRepository, InMemoryOnboardingRepository,
};
use sama_wellness::application::handlers::checkin::ProcessCheckinHandler;
use sama_wellness::application::handlers::onboarding::{
    GetAssessmentHandler, StartOnboardingHandler, SubmitPhase1Handler, SubmitPhase2Handler,
};
use sama_wellness::config::{AppConfig, LlmBackend};
use sama_wellness::ports::LlmProvider;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let llm: Arc<dyn LlmProvider> = match config.llm.backend {
        LlmBackend::Mock => Arc::new(MockLlmProvider::default()),
        LlmBackend::OpenAi => {
            // validate() guarantees the key is present for this backend
            let api_key = config.llm.api_key.clone().unwrap_or_default();
            let provider_config = OpenAiConfig::new(api_key)
                .with_model(&config.llm.model)
                .with_base_url(&config.llm.base_url)
                .with_timeout(config.llm.timeout())
                .with_max_retries(config.llm.max_retries);
            Arc::new(OpenAiProvider::new(provider_config))
        }
    };
    info!(
        backend = ?config.llm.backend,
        model = %llm.provider_info().model,
        "LLM provider initialized"
    );

    let onboarding_repo = Arc::new(InMemoryOnboardingRepository::new());
    let conversation_repo = Arc::new(InMemoryConversationRepository::new());
    let emotion = Arc::new(KeywordEmotionAnalyzer::new());

    let onboarding_handlers = OnboardingHandlers::new(
        Arc::new(StartOnboardingHandler::new(onboarding_repo.clone())),
        Arc::new(SubmitPhase1Handler::new(onboarding_repo.clone())),
        Arc::new(SubmitPhase2Handler::new(onboarding_repo.clone())),
        Arc::new(GetAssessmentHandler::new(onboarding_repo)),
    );
    let checkin_handlers = CheckinHandlers::new(Arc::new(ProcessCheckinHandler::new(
        conversation_repo,
        emotion,
        llm,
    )));

    let cors = build_cors_layer(&config.server.cors_origins_list());
    let app = app_router(onboarding_handlers, checkin_handlers)
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    info!(%addr, "Starting server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        process::exit(1);
    }
}

fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
