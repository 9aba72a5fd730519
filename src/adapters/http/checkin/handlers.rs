//! HTTP handlers for check-in endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::checkin::{ProcessCheckinCommand, ProcessCheckinHandler};
use crate::domain::checkin::CheckinError;
use crate::domain::dosha::Dosha;
use crate::domain::foundation::UserId;
use crate::ports::LlmError;

use super::dto::{CheckinRequest, CheckinResponse};

#[derive(Clone)]
pub struct CheckinHandlers {
    process_handler: Arc<ProcessCheckinHandler>,
}

impl CheckinHandlers {
    pub fn new(process_handler: Arc<ProcessCheckinHandler>) -> Self {
        Self { process_handler }
    }
}

/// POST /api/checkin - Process one check-in turn
pub async fn process_checkin(
    State(handlers): State<CheckinHandlers>,
    Json(req): Json<CheckinRequest>,
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

    let prakriti = match req.prakriti.as_deref().map(str::parse::<Dosha>).transpose() {
        Ok(dosha) => dosha,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid prakriti value")),
            )
                .into_response()
        }
    };

    let cmd = ProcessCheckinCommand {
        user_id,
        text: req.text,
        nickname: req.nickname,
        prakriti,
    };

    match handlers.process_handler.handle(cmd).await {
        Ok(result) => {
            let response: CheckinResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_checkin_error(e),
    }
}

fn handle_checkin_error(error: CheckinError) -> Response {
    match error {
        CheckinError::Llm(LlmError::RateLimited) => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::rate_limited("LLM provider rate limit hit")),
        )
            .into_response(),
        CheckinError::Llm(err) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::bad_gateway(err.to_string())),
        )
            .into_response(),
        CheckinError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        CheckinError::Infrastructure(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_maps_to_429() {
        let response = handle_checkin_error(CheckinError::Llm(LlmError::RateLimited));
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn provider_failure_maps_to_502() {
        let error = CheckinError::Llm(LlmError::Provider("boom".to_string()));
        let response = handle_checkin_error(error);
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn validation_maps_to_400() {
        let error = CheckinError::validation("text", "empty");
        let response = handle_checkin_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
