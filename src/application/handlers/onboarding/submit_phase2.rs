//! SubmitPhase2Handler - Command handler for the final submission.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::domain::dosha::{DoshaScorer, QuestionnairePhase, ScoreResult};
use crate::domain::foundation::{OnboardingSessionId, UserId};
use crate::domain::onboarding::{OnboardingError, OnboardingSession};
use crate::ports::OnboardingRepository;

/// Command to submit phase-2 answers and finalize the assessment.
#[derive(Debug, Clone)]
pub struct SubmitPhase2Command {
    pub session_id: OnboardingSessionId,
    pub user_id: UserId,
    pub answers: HashMap<String, String>,
}

/// Result of finalizing the assessment.
#[derive(Debug, Clone)]
pub struct SubmitPhase2Result {
    pub session: OnboardingSession,
    pub result: ScoreResult,
}

/// Handler for phase-2 submissions.
pub struct SubmitPhase2Handler {
    repository: Arc<dyn OnboardingRepository>,
}

impl SubmitPhase2Handler {
    pub fn new(repository: Arc<dyn OnboardingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitPhase2Command,
    ) -> Result<SubmitPhase2Result, OnboardingError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(OnboardingError::NotFound(cmd.session_id))?;

        if session.user_id() != &cmd.user_id {
            return Err(OnboardingError::validation(
                "user_id",
                "Session belongs to a different user",
            ));
        }

        // The final score runs over both phases merged
        let combined = session.combined_answers(&cmd.answers);
        let result = DoshaScorer::calculate(&combined, QuestionnairePhase::Final);

        session.finalize(cmd.answers, result.clone())?;
        self.repository.update(&session).await?;

        info!(
            session_id = %session.id(),
            prakriti = %result.classification.label,
            "Assessment finalized"
        );

        Ok(SubmitPhase2Result { session, result })
    }
}
