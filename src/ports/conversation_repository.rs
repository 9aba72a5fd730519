//! Conversation repository port.

use async_trait::async_trait;

use crate::domain::checkin::CheckinMessage;
use crate::domain::foundation::{DomainError, UserId};

/// Repository port for check-in conversation persistence.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Persist a completed check-in turn.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, message: &CheckinMessage) -> Result<(), DomainError>;

    /// Fetch the user's most recent turns, oldest first, at most `limit`.
    async fn recent_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<CheckinMessage>, DomainError>;
}
