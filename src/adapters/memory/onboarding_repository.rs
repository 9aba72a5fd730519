//! In-memory onboarding repository implementation.
//!
//! Thread-safe via internal `Mutex`. Suitable for development, testing,
//! and single-server deployments; does not persist across restarts. A
//! database-backed implementation replaces this behind the same port in
//! production.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, OnboardingSessionId};
use crate::domain::onboarding::OnboardingSession;
use crate::ports::OnboardingRepository;

/// In-memory implementation of the `OnboardingRepository` port.
#[derive(Default)]
pub struct InMemoryOnboardingRepository {
    sessions: Mutex<HashMap<OnboardingSessionId, OnboardingSession>>,
}

impl InMemoryOnboardingRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Checks whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OnboardingRepository for InMemoryOnboardingRepository {
    async fn save(&self, session: &OnboardingSession) -> Result<(), DomainError> {
        self.sessions
            .lock()
            .unwrap()
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &OnboardingSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().unwrap();
        if !sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &OnboardingSessionId,
    ) -> Result<Option<OnboardingSession>, DomainError> {
        Ok(self.sessions.lock().unwrap().get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn test_session() -> OnboardingSession {
        OnboardingSession::new(
            OnboardingSessionId::new(),
            UserId::new("user-123").unwrap(),
        )
    }

    #[tokio::test]
    async fn save_then_find_returns_session() {
        let repo = InMemoryOnboardingRepository::new();
        let session = test_session();

        repo.save(&session).await.unwrap();
        let found = repo.find_by_id(session.id()).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn find_unknown_id_returns_none() {
        let repo = InMemoryOnboardingRepository::new();
        let found = repo.find_by_id(&OnboardingSessionId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_unknown_session_fails() {
        let repo = InMemoryOnboardingRepository::new();
        let err = repo.update(&test_session()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn update_replaces_stored_session() {
        let repo = InMemoryOnboardingRepository::new();
        let mut session = test_session();
        repo.save(&session).await.unwrap();

        session
            .record_phase1(
                HashMap::new(),
                crate::domain::dosha::PreliminaryPattern::Balanced,
            )
            .unwrap();
        repo.update(&session).await.unwrap();

        let found = repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(found.phase(), session.phase());
    }
}
