//! HTTP routes for onboarding endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_assessment, start_onboarding, submit_phase1, submit_phase2, OnboardingHandlers,
};

/// Creates the onboarding router with all endpoints.
pub fn onboarding_routes(handlers: OnboardingHandlers) -> Router {
    Router::new()
        .route("/start", post(start_onboarding))
        .route("/phase1/submit", post(submit_phase1))
        .route("/phase2/submit", post(submit_phase2))
        .route("/:id", get(get_assessment))
        .with_state(handlers)
}
