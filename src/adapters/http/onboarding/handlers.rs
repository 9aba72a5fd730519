//! HTTP handlers for onboarding endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::onboarding::{
    GetAssessmentHandler, GetAssessmentQuery, StartOnboardingCommand, StartOnboardingHandler,
    SubmitPhase1Command, SubmitPhase1Handler, SubmitPhase2Command, SubmitPhase2Handler,
};
use crate::domain::foundation::{OnboardingSessionId, UserId};
use crate::domain::onboarding::OnboardingError;

use super::dto::{
    FinalResultResponse, Phase1Response, QuestionDto, SessionStatusResponse,
    StartOnboardingRequest, StartOnboardingResponse, SubmitAnswersRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct OnboardingHandlers {
    start_handler: Arc<StartOnboardingHandler>,
    phase1_handler: Arc<SubmitPhase1Handler>,
    phase2_handler: Arc<SubmitPhase2Handler>,
    get_handler: Arc<GetAssessmentHandler>,
}

impl OnboardingHandlers {
    pub fn new(
        start_handler: Arc<StartOnboardingHandler>,
        phase1_handler: Arc<SubmitPhase1Handler>,
        phase2_handler: Arc<SubmitPhase2Handler>,
        get_handler: Arc<GetAssessmentHandler>,
    ) -> Self {
        Self {
            start_handler,
            phase1_handler,
            phase2_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/onboarding/start - Start a new assessment
pub async fn start_onboarding(
    State(handlers): State<OnboardingHandlers>,
    Json(req): Json<StartOnboardingRequest>,
) -> Response {
    let user_id = match UserId::new(req.user_id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid user ID")),
            )
                .into_response()
        }
    };

    match handlers
        .start_handler
        .handle(StartOnboardingCommand { user_id })
        .await
    {
        Ok(result) => {
            let response = StartOnboardingResponse {
                session_id: result.session.id().to_string(),
                phase: result.session.phase(),
                questions: result.questions.iter().map(QuestionDto::from).collect(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_onboarding_error(e),
    }
}

/// POST /api/onboarding/phase1/submit - Submit phase-1 answers
pub async fn submit_phase1(
    State(handlers): State<OnboardingHandlers>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Response {
    let (session_id, user_id) = match parse_submission_ids(&req) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = SubmitPhase1Command {
        session_id,
        user_id,
        answers: req.answers,
    };

    match handlers.phase1_handler.handle(cmd).await {
        Ok(result) => {
            let response = Phase1Response {
                session_id: result.session.id().to_string(),
                phase: result.session.phase(),
                preliminary_pattern: result.pattern.to_string(),
                preliminary_percentages: result
                    .preliminary
                    .percentages
                    .iter()
                    .map(|(dosha, pct)| (dosha.key().to_string(), *pct))
                    .collect(),
                questions: result.questions.iter().map(QuestionDto::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_onboarding_error(e),
    }
}

/// POST /api/onboarding/phase2/submit - Submit phase-2 answers and finalize
pub async fn submit_phase2(
    State(handlers): State<OnboardingHandlers>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Response {
    let (session_id, user_id) = match parse_submission_ids(&req) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = SubmitPhase2Command {
        session_id,
        user_id,
        answers: req.answers,
    };

    match handlers.phase2_handler.handle(cmd).await {
        Ok(result) => {
            let response = FinalResultResponse::from_session(&result.session, &result.result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_onboarding_error(e),
    }
}

/// GET /api/onboarding/:id - Get assessment status
pub async fn get_assessment(
    State(handlers): State<OnboardingHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<OnboardingSessionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid session ID")),
            )
                .into_response()
        }
    };

    match handlers
        .get_handler
        .handle(GetAssessmentQuery { session_id })
        .await
    {
        Ok(session) => {
            let response = SessionStatusResponse::from(&session);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_onboarding_error(e),
    }
}

fn parse_submission_ids(
    req: &SubmitAnswersRequest,
) -> Result<(OnboardingSessionId, UserId), Response> {
    let session_id = req.session_id.parse::<OnboardingSessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })?;
    let user_id = UserId::new(&req.user_id).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid user ID")),
        )
            .into_response()
    })?;
    Ok((session_id, user_id))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_onboarding_error(error: OnboardingError) -> Response {
    match error {
        OnboardingError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        OnboardingError::InvalidPhase(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(msg)),
        )
            .into_response(),
        OnboardingError::AlreadyComplete => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(
                "Assessment is already complete",
            )),
        )
            .into_response(),
        OnboardingError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        OnboardingError::Infrastructure(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
