//! Check-in conversation message record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp, UserId};

use super::{EmotionReading, ResponseMode};

/// One persisted check-in turn: the user's text and the companion reply,
/// together with the emotion reading that informed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinMessage {
    /// Unique identifier for this turn.
    pub id: MessageId,
    /// User who checked in.
    pub user_id: UserId,
    /// The user's message text.
    pub user_text: String,
    /// The companion's reply.
    pub reply: String,
    /// Emotion detected in the user's text.
    pub emotion: EmotionReading,
    /// Register the reply was generated in.
    pub mode: ResponseMode,
    /// When the turn happened.
    pub created_at: Timestamp,
}

impl CheckinMessage {
    /// Creates a new check-in turn with a fresh id and timestamp.
    pub fn new(
        user_id: UserId,
        user_text: String,
        reply: String,
        emotion: EmotionReading,
        mode: ResponseMode,
    ) -> Self {
        Self {
            id: MessageId::new(),
            user_id,
            user_text,
            reply,
            emotion,
            mode,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkin::Emotion;

    #[test]
    fn new_message_gets_fresh_id() {
        let user_id = UserId::new("user-1").unwrap();
        let a = CheckinMessage::new(
            user_id.clone(),
            "hi".to_string(),
            "hello".to_string(),
            EmotionReading::neutral(0.5),
            ResponseMode::Friend,
        );
        let b = CheckinMessage::new(
            user_id,
            "hi".to_string(),
            "hello".to_string(),
            EmotionReading::neutral(0.5),
            ResponseMode::Friend,
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn message_serializes_roundtrip() {
        let msg = CheckinMessage::new(
            UserId::new("user-1").unwrap(),
            "feeling anxious".to_string(),
            "take a breath, friend".to_string(),
            EmotionReading::new(Emotion::Fear, 0.5, None),
            ResponseMode::Friend,
        );
        let json = serde_json::to_string(&msg).unwrap();
        let back: CheckinMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }
}
