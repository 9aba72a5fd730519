//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod checkin;
pub mod error;
pub mod onboarding;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

// Re-export key types for convenience
pub use checkin::{checkin_routes, CheckinHandlers};
pub use error::ErrorResponse;
pub use onboarding::{onboarding_routes, OnboardingHandlers};

/// GET /health - Liveness probe
async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Assembles the full application router.
pub fn app_router(onboarding: OnboardingHandlers, checkin: CheckinHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/onboarding", onboarding_routes(onboarding))
        .nest("/api/checkin", checkin_routes(checkin))
        .layer(TraceLayer::new_for_http())
}
