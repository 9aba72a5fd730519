//! Onboarding session aggregate.
//!
//! An onboarding session walks a user through the two-phase dosha
//! questionnaire and records the final classification. Persistence is
//! owned by the caller through the `OnboardingRepository` port.
//!
//! # Invariants
//!
//! - Phase-1 and phase-2 answer id spaces are disjoint (q1-q5 vs q6-q15),
//!   so merging never overwrites.
//! - `Complete` is terminal; a finalized session cannot be resubmitted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::dosha::{PreliminaryPattern, ScoreResult};
use crate::domain::foundation::{
    OnboardingSessionId, StateMachine, Timestamp, UserId,
};

use super::OnboardingError;

/// Lifecycle phase of an onboarding session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingPhase {
    AwaitingPhase1,
    AwaitingPhase2,
    Complete,
}

impl StateMachine for OnboardingPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OnboardingPhase::*;
        matches!(
            (self, target),
            (AwaitingPhase1, AwaitingPhase2) | (AwaitingPhase2, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OnboardingPhase::*;
        match self {
            AwaitingPhase1 => vec![AwaitingPhase2],
            AwaitingPhase2 => vec![Complete],
            Complete => vec![],
        }
    }
}

/// Onboarding session aggregate - accumulates questionnaire answers
/// across two phases and holds the final classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingSession {
    /// Unique identifier for this session.
    id: OnboardingSessionId,

    /// User taking the assessment.
    user_id: UserId,

    /// Current lifecycle phase.
    phase: OnboardingPhase,

    /// Answers submitted in phase 1, keyed by question id.
    phase1_answers: HashMap<String, String>,

    /// Answers submitted in phase 2, keyed by question id.
    phase2_answers: HashMap<String, String>,

    /// Leaning derived from the phase-1 score.
    preliminary_pattern: Option<PreliminaryPattern>,

    /// Final classification, present once complete.
    final_result: Option<ScoreResult>,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session was last updated.
    updated_at: Timestamp,
}

impl OnboardingSession {
    /// Creates a new session awaiting phase-1 answers.
    pub fn new(id: OnboardingSessionId, user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_id,
            phase: OnboardingPhase::AwaitingPhase1,
            phase1_answers: HashMap::new(),
            phase2_answers: HashMap::new(),
            preliminary_pattern: None,
            final_result: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: OnboardingSessionId,
        user_id: UserId,
        phase: OnboardingPhase,
        phase1_answers: HashMap<String, String>,
        phase2_answers: HashMap<String, String>,
        preliminary_pattern: Option<PreliminaryPattern>,
        final_result: Option<ScoreResult>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            phase,
            phase1_answers,
            phase2_answers,
            preliminary_pattern,
            final_result,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &OnboardingSessionId {
        &self.id
    }

    /// Returns the user taking the assessment.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> OnboardingPhase {
        self.phase
    }

    /// Returns the stored phase-1 answers.
    pub fn phase1_answers(&self) -> &HashMap<String, String> {
        &self.phase1_answers
    }

    /// Returns the stored phase-2 answers.
    pub fn phase2_answers(&self) -> &HashMap<String, String> {
        &self.phase2_answers
    }

    /// Returns the preliminary pattern, if phase 1 has been scored.
    pub fn preliminary_pattern(&self) -> Option<&PreliminaryPattern> {
        self.preliminary_pattern.as_ref()
    }

    /// Returns the final classification, if complete.
    pub fn final_result(&self) -> Option<&ScoreResult> {
        self.final_result.as_ref()
    }

    /// Checks whether the assessment has been finalized.
    pub fn is_complete(&self) -> bool {
        self.phase == OnboardingPhase::Complete
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Records phase-1 answers and the derived leaning, transitioning
    /// to `AwaitingPhase2`.
    ///
    /// # Errors
    ///
    /// - `AlreadyComplete` if the session is finalized
    /// - `InvalidPhase` if phase 1 was already submitted
    pub fn record_phase1(
        &mut self,
        answers: HashMap<String, String>,
        pattern: PreliminaryPattern,
    ) -> Result<(), OnboardingError> {
        if self.is_complete() {
            return Err(OnboardingError::AlreadyComplete);
        }
        self.phase = self
            .phase
            .transition_to(OnboardingPhase::AwaitingPhase2)
            .map_err(|e| OnboardingError::invalid_phase(e.to_string()))?;
        self.phase1_answers = answers;
        self.preliminary_pattern = Some(pattern);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Records phase-2 answers and the final classification,
    /// transitioning to the terminal `Complete` phase.
    ///
    /// # Errors
    ///
    /// - `AlreadyComplete` if the session is finalized
    /// - `InvalidPhase` if phase 1 has not been submitted yet
    pub fn finalize(
        &mut self,
        answers: HashMap<String, String>,
        result: ScoreResult,
    ) -> Result<(), OnboardingError> {
        if self.is_complete() {
            return Err(OnboardingError::AlreadyComplete);
        }
        self.phase = self
            .phase
            .transition_to(OnboardingPhase::Complete)
            .map_err(|e| OnboardingError::invalid_phase(e.to_string()))?;
        self.phase2_answers = answers;
        self.final_result = Some(result);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Merges the given phase-2 answers over the stored phase-1 answers.
    ///
    /// Question id spaces are disjoint across phases, so later entries
    /// never clobber earlier ones in practice.
    pub fn combined_answers(
        &self,
        phase2_answers: &HashMap<String, String>,
    ) -> HashMap<String, String> {
        let mut combined = self.phase1_answers.clone();
        combined.extend(
            phase2_answers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dosha::{DoshaScorer, QuestionnairePhase};

    fn test_session() -> OnboardingSession {
        OnboardingSession::new(
            OnboardingSessionId::new(),
            UserId::new("user-123").unwrap(),
        )
    }

    fn phase1_answers() -> HashMap<String, String> {
        (1..=5)
            .map(|n| (format!("q{}", n), "a".to_string()))
            .collect()
    }

    fn phase2_answers() -> HashMap<String, String> {
        (6..=15)
            .map(|n| (format!("q{}", n), "b".to_string()))
            .collect()
    }

    fn score(answers: &HashMap<String, String>) -> ScoreResult {
        DoshaScorer::calculate(answers, QuestionnairePhase::Final)
    }

    #[test]
    fn new_session_awaits_phase1() {
        let session = test_session();
        assert_eq!(session.phase(), OnboardingPhase::AwaitingPhase1);
        assert!(session.phase1_answers().is_empty());
        assert!(session.preliminary_pattern().is_none());
        assert!(!session.is_complete());
    }

    #[test]
    fn record_phase1_transitions_and_stores_pattern() {
        let mut session = test_session();
        session
            .record_phase1(phase1_answers(), PreliminaryPattern::Balanced)
            .unwrap();

        assert_eq!(session.phase(), OnboardingPhase::AwaitingPhase2);
        assert_eq!(session.phase1_answers().len(), 5);
        assert_eq!(
            session.preliminary_pattern(),
            Some(&PreliminaryPattern::Balanced)
        );
    }

    #[test]
    fn record_phase1_twice_fails() {
        let mut session = test_session();
        session
            .record_phase1(phase1_answers(), PreliminaryPattern::Balanced)
            .unwrap();

        let result = session.record_phase1(phase1_answers(), PreliminaryPattern::Balanced);
        assert!(matches!(result, Err(OnboardingError::InvalidPhase(_))));
    }

    #[test]
    fn finalize_before_phase1_fails() {
        let mut session = test_session();
        let result = session.finalize(phase2_answers(), score(&phase2_answers()));
        assert!(matches!(result, Err(OnboardingError::InvalidPhase(_))));
    }

    #[test]
    fn finalize_completes_the_session() {
        let mut session = test_session();
        session
            .record_phase1(phase1_answers(), PreliminaryPattern::Balanced)
            .unwrap();

        let combined = session.combined_answers(&phase2_answers());
        session
            .finalize(phase2_answers(), score(&combined))
            .unwrap();

        assert!(session.is_complete());
        assert!(session.final_result().is_some());
        assert_eq!(session.phase2_answers().len(), 10);
    }

    #[test]
    fn complete_is_terminal() {
        let mut session = test_session();
        session
            .record_phase1(phase1_answers(), PreliminaryPattern::Balanced)
            .unwrap();
        let combined = session.combined_answers(&phase2_answers());
        session
            .finalize(phase2_answers(), score(&combined))
            .unwrap();

        assert!(session.phase().is_terminal());
        assert_eq!(
            session.finalize(phase2_answers(), score(&combined)),
            Err(OnboardingError::AlreadyComplete)
        );
        assert_eq!(
            session.record_phase1(phase1_answers(), PreliminaryPattern::Balanced),
            Err(OnboardingError::AlreadyComplete)
        );
    }

    #[test]
    fn combined_answers_merges_both_phases() {
        let mut session = test_session();
        session
            .record_phase1(phase1_answers(), PreliminaryPattern::Balanced)
            .unwrap();

        let combined = session.combined_answers(&phase2_answers());
        assert_eq!(combined.len(), 15);
        assert_eq!(combined.get("q1"), Some(&"a".to_string()));
        assert_eq!(combined.get("q15"), Some(&"b".to_string()));
    }

    #[test]
    fn phase_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OnboardingPhase::AwaitingPhase1).unwrap(),
            "\"awaiting_phase1\""
        );
        assert_eq!(
            serde_json::to_string(&OnboardingPhase::Complete).unwrap(),
            "\"complete\""
        );
    }
}
