//! Keyword-based emotion analyzer.
//!
//! Fallback classifier used when no transformer model is deployed:
//! scans the message for emotion keywords and maps each detected
//! emotion to the dosha it signals. All readings carry a fixed 0.5
//! confidence to reflect the crudeness of the method.

use async_trait::async_trait;

use crate::domain::checkin::{Emotion, EmotionReading};
use crate::domain::dosha::Dosha;
use crate::domain::foundation::DomainError;
use crate::ports::EmotionAnalyzer;

const FEAR_KEYWORDS: &[&str] = &["anxious", "worried", "nervous", "fear", "panic"];
const ANGER_KEYWORDS: &[&str] = &["angry", "frustrated", "annoyed", "irritated"];
const SADNESS_KEYWORDS: &[&str] = &["sad", "depressed", "unmotivated", "tired", "lethargic"];

const KEYWORD_CONFIDENCE: f64 = 0.5;

/// Emotion analyzer backed by a fixed keyword table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordEmotionAnalyzer;

impl KeywordEmotionAnalyzer {
    /// Creates a new analyzer.
    pub fn new() -> Self {
        Self
    }

    fn classify(text: &str) -> EmotionReading {
        let lower = text.to_lowercase();
        if FEAR_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            EmotionReading::new(Emotion::Fear, KEYWORD_CONFIDENCE, Some(Dosha::Vata))
        } else if ANGER_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            EmotionReading::new(Emotion::Anger, KEYWORD_CONFIDENCE, Some(Dosha::Pitta))
        } else if SADNESS_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            EmotionReading::new(Emotion::Sadness, KEYWORD_CONFIDENCE, Some(Dosha::Kapha))
        } else {
            EmotionReading::neutral(KEYWORD_CONFIDENCE)
        }
    }
}

#[async_trait]
impl EmotionAnalyzer for KeywordEmotionAnalyzer {
    async fn analyze(&self, text: &str) -> Result<EmotionReading, DomainError> {
        Ok(Self::classify(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fear_keywords_signal_vata() {
        let analyzer = KeywordEmotionAnalyzer::new();
        let reading = analyzer.analyze("I'm so anxious about the exam").await.unwrap();
        assert_eq!(reading.emotion, Emotion::Fear);
        assert_eq!(reading.dosha_signal, Some(Dosha::Vata));
        assert_eq!(reading.confidence, 0.5);
    }

    #[tokio::test]
    async fn anger_keywords_signal_pitta() {
        let analyzer = KeywordEmotionAnalyzer::new();
        let reading = analyzer.analyze("so FRUSTRATED with work today").await.unwrap();
        assert_eq!(reading.emotion, Emotion::Anger);
        assert_eq!(reading.dosha_signal, Some(Dosha::Pitta));
    }

    #[tokio::test]
    async fn sadness_keywords_signal_kapha() {
        let analyzer = KeywordEmotionAnalyzer::new();
        let reading = analyzer.analyze("feeling tired and unmotivated").await.unwrap();
        assert_eq!(reading.emotion, Emotion::Sadness);
        assert_eq!(reading.dosha_signal, Some(Dosha::Kapha));
    }

    #[tokio::test]
    async fn unmatched_text_is_neutral_without_signal() {
        let analyzer = KeywordEmotionAnalyzer::new();
        let reading = analyzer.analyze("had lunch with a friend").await.unwrap();
        assert_eq!(reading.emotion, Emotion::Neutral);
        assert_eq!(reading.dosha_signal, None);
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let analyzer = KeywordEmotionAnalyzer::new();
        let reading = analyzer.analyze("PANIC mode all morning").await.unwrap();
        assert_eq!(reading.emotion, Emotion::Fear);
    }
}
