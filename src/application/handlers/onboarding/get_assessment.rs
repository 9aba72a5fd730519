//! GetAssessmentHandler - Query handler for session status.

use std::sync::Arc;

use crate::domain::foundation::OnboardingSessionId;
use crate::domain::onboarding::{OnboardingError, OnboardingSession};
use crate::ports::OnboardingRepository;

/// Query for an onboarding session's current state.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub session_id: OnboardingSessionId,
}

/// Handler for assessment status queries.
pub struct GetAssessmentHandler {
    repository: Arc<dyn OnboardingRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn OnboardingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetAssessmentQuery,
    ) -> Result<OnboardingSession, OnboardingError> {
        self.repository
            .find_by_id(&query.session_id)
            .await?
            .ok_or(OnboardingError::NotFound(query.session_id))
    }
}
