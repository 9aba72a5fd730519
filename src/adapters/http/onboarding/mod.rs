//! Onboarding HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::OnboardingHandlers;
pub use routes::onboarding_routes;
