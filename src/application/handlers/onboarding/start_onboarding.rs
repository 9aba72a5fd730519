//! StartOnboardingHandler - Command handler for starting an assessment.

use std::sync::Arc;
use tracing::info;

use crate::domain::dosha::{phase1_questions, Question};
use crate::domain::foundation::{OnboardingSessionId, UserId};
use crate::domain::onboarding::{OnboardingError, OnboardingSession};
use crate::ports::OnboardingRepository;

/// Command to start a new onboarding assessment.
#[derive(Debug, Clone)]
pub struct StartOnboardingCommand {
    pub user_id: UserId,
}

/// Result of starting an assessment: the new session plus the phase-1
/// questions the client should present.
#[derive(Debug, Clone)]
pub struct StartOnboardingResult {
    pub session: OnboardingSession,
    pub questions: &'static [Question],
}

/// Handler for starting assessments.
pub struct StartOnboardingHandler {
    repository: Arc<dyn OnboardingRepository>,
}

impl StartOnboardingHandler {
    pub fn new(repository: Arc<dyn OnboardingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: StartOnboardingCommand,
    ) -> Result<StartOnboardingResult, OnboardingError> {
        let session_id = OnboardingSessionId::new();
        let session = OnboardingSession::new(session_id, cmd.user_id);

        self.repository.save(&session).await?;

        info!(session_id = %session.id(), user_id = %session.user_id(), "Onboarding session started");

        Ok(StartOnboardingResult {
            session,
            questions: phase1_questions(),
        })
    }
}
