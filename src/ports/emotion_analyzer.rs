//! Emotion analyzer port.
//!
//! Abstracts emotion inference over user text. The production deployment
//! fronts a fine-tuned transformer model; this crate ships the keyword
//! fallback analyzer the original service degrades to when the model is
//! unavailable.

use async_trait::async_trait;

use crate::domain::checkin::EmotionReading;
use crate::domain::foundation::DomainError;

/// Port for inferring the emotional state of a message.
#[async_trait]
pub trait EmotionAnalyzer: Send + Sync {
    /// Analyzes the text and returns an emotion reading.
    ///
    /// Implementations should degrade to a low-confidence neutral
    /// reading rather than fail on unclassifiable input.
    async fn analyze(&self, text: &str) -> Result<EmotionReading, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn emotion_analyzer_is_object_safe() {
        fn _accepts_dyn(_analyzer: &dyn EmotionAnalyzer) {}
    }
}
