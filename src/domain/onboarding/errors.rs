//! Onboarding-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, OnboardingSessionId};

/// Errors raised by the onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    /// Session was not found in the store.
    NotFound(OnboardingSessionId),
    /// Operation not valid in the session's current phase.
    InvalidPhase(String),
    /// The assessment has already been finalized.
    AlreadyComplete,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl OnboardingError {
    pub fn not_found(id: OnboardingSessionId) -> Self {
        OnboardingError::NotFound(id)
    }

    pub fn invalid_phase(message: impl Into<String>) -> Self {
        OnboardingError::InvalidPhase(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        OnboardingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        OnboardingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            OnboardingError::NotFound(_) => ErrorCode::SessionNotFound,
            OnboardingError::InvalidPhase(_) => ErrorCode::InvalidStateTransition,
            OnboardingError::AlreadyComplete => ErrorCode::AssessmentComplete,
            OnboardingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            OnboardingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            OnboardingError::NotFound(id) => format!("Session not found: {}", id),
            OnboardingError::InvalidPhase(msg) => format!("Invalid phase: {}", msg),
            OnboardingError::AlreadyComplete => "Assessment is already complete".to_string(),
            OnboardingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            OnboardingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for OnboardingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OnboardingError {}

impl From<DomainError> for OnboardingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => OnboardingError::InvalidPhase(err.to_string()),
            ErrorCode::AssessmentComplete => OnboardingError::AlreadyComplete,
            ErrorCode::ValidationFailed | ErrorCode::InvalidFormat | ErrorCode::EmptyField => {
                OnboardingError::ValidationFailed {
                    field: "unknown".to_string(),
                    message: err.to_string(),
                }
            }
            _ => OnboardingError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_session_not_found_code() {
        let err = OnboardingError::not_found(OnboardingSessionId::new());
        assert_eq!(err.code(), ErrorCode::SessionNotFound);
    }

    #[test]
    fn already_complete_maps_to_assessment_complete_code() {
        assert_eq!(
            OnboardingError::AlreadyComplete.code(),
            ErrorCode::AssessmentComplete
        );
    }

    #[test]
    fn display_includes_session_id() {
        let id = OnboardingSessionId::new();
        let err = OnboardingError::not_found(id);
        assert!(format!("{}", err).contains(&id.to_string()));
    }

    #[test]
    fn domain_database_error_converts_to_infrastructure() {
        let err: OnboardingError =
            DomainError::new(ErrorCode::DatabaseError, "connection lost").into();
        assert!(matches!(err, OnboardingError::Infrastructure(_)));
    }
}
