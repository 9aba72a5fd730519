//! SubmitPhase1Handler - Command handler for phase-1 answer submission.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::domain::dosha::{
    phase2_questions, DoshaScorer, PreliminaryPattern, Question, QuestionnairePhase, ScoreResult,
};
use crate::domain::foundation::{OnboardingSessionId, UserId};
use crate::domain::onboarding::{OnboardingError, OnboardingSession};
use crate::ports::OnboardingRepository;

/// Command to submit phase-1 answers.
#[derive(Debug, Clone)]
pub struct SubmitPhase1Command {
    pub session_id: OnboardingSessionId,
    pub user_id: UserId,
    pub answers: HashMap<String, String>,
}

/// Result of a phase-1 submission: the preliminary read plus the
/// phase-2 questions the client should present next.
#[derive(Debug, Clone)]
pub struct SubmitPhase1Result {
    pub session: OnboardingSession,
    pub preliminary: ScoreResult,
    pub pattern: PreliminaryPattern,
    pub questions: &'static [Question],
}

/// Handler for phase-1 submissions.
pub struct SubmitPhase1Handler {
    repository: Arc<dyn OnboardingRepository>,
}

impl SubmitPhase1Handler {
    pub fn new(repository: Arc<dyn OnboardingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitPhase1Command,
    ) -> Result<SubmitPhase1Result, OnboardingError> {
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

        let preliminary = DoshaScorer::calculate(&cmd.answers, QuestionnairePhase::Phase1);
        let pattern = DoshaScorer::preliminary_pattern(&preliminary);

        session.record_phase1(cmd.answers, pattern.clone())?;
        self.repository.update(&session).await?;

        info!(
            session_id = %session.id(),
            pattern = %pattern,
            "Phase 1 scored"
        );

        Ok(SubmitPhase1Result {
            session,
            preliminary,
            questions: phase2_questions(&pattern),
            pattern,
        })
    }
}
