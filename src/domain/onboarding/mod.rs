//! Onboarding domain - two-phase questionnaire session lifecycle.

mod aggregate;
mod errors;

pub use aggregate::{OnboardingPhase, OnboardingSession};
pub use errors::OnboardingError;
