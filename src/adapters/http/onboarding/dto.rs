//! HTTP DTOs for onboarding endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::dosha::{ClassificationType, Question, ScoreResult};
use crate::domain::onboarding::{OnboardingPhase, OnboardingSession};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a new assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct StartOnboardingRequest {
    pub user_id: String,
}

/// Request to submit answers for either phase.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswersRequest {
    pub session_id: String,
    pub user_id: String,
    /// Question id -> selected option key ("q1" -> "a").
    pub answers: HashMap<String, String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One question as presented to clients.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub tier: u8,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    pub options: Vec<AnswerOptionDto>,
}

/// One selectable answer option.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOptionDto {
    pub key: String,
    pub text: String,
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id().to_string(),
            tier: question.tier().number(),
            prompt: question.prompt().to_string(),
            instruction: question.instruction().map(str::to_string),
            options: question
                .options()
                .iter()
                .map(|o| AnswerOptionDto {
                    key: o.key.clone(),
                    text: o.text.clone(),
                })
                .collect(),
        }
    }
}

/// Response to starting an assessment.
#[derive(Debug, Clone, Serialize)]
pub struct StartOnboardingResponse {
    pub session_id: String,
    pub phase: OnboardingPhase,
    pub questions: Vec<QuestionDto>,
}

/// Response to a phase-1 submission: preliminary read plus the next
/// question set.
#[derive(Debug, Clone, Serialize)]
pub struct Phase1Response {
    pub session_id: String,
    pub phase: OnboardingPhase,
    pub preliminary_pattern: String,
    pub preliminary_percentages: BTreeMap<String, f64>,
    pub questions: Vec<QuestionDto>,
}

/// Final classification payload.
#[derive(Debug, Clone, Serialize)]
pub struct FinalResultResponse {
    pub session_id: String,
    pub user_id: String,
    pub prakriti_type: String,
    pub classification_type: ClassificationType,
    pub dosha_percentages: BTreeMap<String, f64>,
    pub scores: BTreeMap<String, u32>,
    pub certainty: String,
    pub confidence: f64,
    pub interpretation: String,
}

impl FinalResultResponse {
    pub fn from_session(session: &OnboardingSession, result: &ScoreResult) -> Self {
        Self {
            session_id: session.id().to_string(),
            user_id: session.user_id().to_string(),
            prakriti_type: result.classification.label.clone(),
            classification_type: result.classification.kind,
            dosha_percentages: result
                .percentages
                .iter()
                .map(|(dosha, pct)| (dosha.key().to_string(), *pct))
                .collect(),
            scores: result
                .scores
                .as_map()
                .iter()
                .map(|(dosha, score)| (dosha.key().to_string(), *score))
                .collect(),
            certainty: result.classification.certainty.to_string(),
            confidence: result.classification.confidence,
            interpretation: result.interpretation.clone(),
        }
    }
}

/// Session status for the polling endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub user_id: String,
    pub phase: OnboardingPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preliminary_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<FinalResultResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&OnboardingSession> for SessionStatusResponse {
    fn from(session: &OnboardingSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            user_id: session.user_id().to_string(),
            phase: session.phase(),
            preliminary_pattern: session.preliminary_pattern().map(|p| p.to_string()),
            result: session
                .final_result()
                .map(|r| FinalResultResponse::from_session(session, r)),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
        }
    }
}
