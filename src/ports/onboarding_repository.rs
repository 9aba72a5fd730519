//! Onboarding repository port.
//!
//! Defines the contract for persisting and retrieving onboarding
//! sessions. The session store is an external collaborator: this crate
//! ships an in-memory adapter, and a database-backed implementation
//! plugs in behind the same trait.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OnboardingSessionId};
use crate::domain::onboarding::OnboardingSession;

/// Repository port for onboarding session persistence.
#[async_trait]
pub trait OnboardingRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &OnboardingSession) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &OnboardingSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(
        &self,
        id: &OnboardingSessionId,
    ) -> Result<Option<OnboardingSession>, DomainError>;
}
