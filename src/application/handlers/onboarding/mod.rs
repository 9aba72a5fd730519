//! Onboarding command and query handlers.

mod get_assessment;
mod start_onboarding;
mod submit_phase1;
mod submit_phase2;

pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use start_onboarding::{StartOnboardingCommand, StartOnboardingHandler, StartOnboardingResult};
pub use submit_phase1::{SubmitPhase1Command, SubmitPhase1Handler, SubmitPhase1Result};
pub use submit_phase2::{SubmitPhase2Command, SubmitPhase2Handler, SubmitPhase2Result};
