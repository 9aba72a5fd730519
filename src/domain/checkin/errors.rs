//! Check-in pipeline error types.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::LlmError;

/// Errors raised while processing a check-in turn.
#[derive(Debug)]
pub enum CheckinError {
    /// The LLM provider call failed.
    Llm(LlmError),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error (persistence, analyzer).
    Infrastructure(String),
}

impl CheckinError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CheckinError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CheckinError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CheckinError::Llm(LlmError::RateLimited) => ErrorCode::RateLimited,
            CheckinError::Llm(_) => ErrorCode::LlmProviderError,
            CheckinError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CheckinError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl std::fmt::Display for CheckinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckinError::Llm(err) => write!(f, "LLM provider error: {}", err),
            CheckinError::ValidationFailed { field, message } => {
                write!(f, "Validation failed for '{}': {}", field, message)
            }
            CheckinError::Infrastructure(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CheckinError {}

impl From<LlmError> for CheckinError {
    fn from(err: LlmError) -> Self {
        CheckinError::Llm(err)
    }
}

impl From<DomainError> for CheckinError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::InvalidFormat | ErrorCode::EmptyField => {
                CheckinError::ValidationFailed {
                    field: "unknown".to_string(),
                    message: err.to_string(),
                }
            }
            _ => CheckinError::Infrastructure(err.to_string()),
        }
    }
}
