//! In-memory conversation repository implementation.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::checkin::CheckinMessage;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ConversationRepository;

/// In-memory implementation of the `ConversationRepository` port.
///
/// Stores check-in turns in arrival order. Thread-safe via internal
/// `Mutex`; does not persist across restarts.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    messages: Mutex<Vec<CheckinMessage>>,
}

impl InMemoryConversationRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of stored turns across all users.
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Checks whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn save(&self, message: &CheckinMessage) -> Result<(), DomainError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn recent_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<CheckinMessage>, DomainError> {
        let messages = self.messages.lock().unwrap();
        let mut recent: Vec<CheckinMessage> = messages
            .iter()
            .rev()
            .filter(|m| &m.user_id == user_id)
            .take(limit)
            .cloned()
            .collect();
        recent.reverse();
        Ok(recent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkin::{EmotionReading, ResponseMode};

    fn test_message(user: &str, text: &str) -> CheckinMessage {
        CheckinMessage::new(
            UserId::new(user).unwrap(),
            text.to_string(),
            "a reply".to_string(),
            EmotionReading::neutral(0.5),
            ResponseMode::Friend,
        )
    }

    #[tokio::test]
    async fn recent_returns_oldest_first_capped_at_limit() {
        let repo = InMemoryConversationRepository::new();
        for i in 0..5 {
            repo.save(&test_message("user-1", &format!("turn {i}")))
                .await
                .unwrap();
        }

        let user = UserId::new("user-1").unwrap();
        let recent = repo.recent_for_user(&user, 3).await.unwrap();

        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].user_text, "turn 2");
        assert_eq!(recent[2].user_text, "turn 4");
    }

    #[tokio::test]
    async fn recent_filters_by_user() {
        let repo = InMemoryConversationRepository::new();
        repo.save(&test_message("user-1", "mine")).await.unwrap();
        repo.save(&test_message("user-2", "theirs")).await.unwrap();

        let user = UserId::new("user-1").unwrap();
        let recent = repo.recent_for_user(&user, 10).await.unwrap();

        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].user_text, "mine");
    }

    #[tokio::test]
    async fn recent_for_unknown_user_is_empty() {
        let repo = InMemoryConversationRepository::new();
        let user = UserId::new("nobody").unwrap();
        assert!(repo.recent_for_user(&user, 10).await.unwrap().is_empty());
    }
}
