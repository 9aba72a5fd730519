//! Emotion reading value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::dosha::Dosha;

/// Primary emotion detected in a check-in message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Fear,
    Anger,
    Sadness,
    Neutral,
}

impl Emotion {
    /// Returns the lowercase label used in payloads and prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Fear => "fear",
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of analyzing one user message.
///
/// The dosha signal maps the emotional state to a transient imbalance
/// (anxiety leans Vata, anger Pitta, low mood Kapha); a neutral reading
/// carries no signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionReading {
    /// Strongest detected emotion.
    pub emotion: Emotion,
    /// Detector confidence in [0, 1].
    pub confidence: f64,
    /// Dosha the emotional state leans toward, if any.
    pub dosha_signal: Option<Dosha>,
}

impl EmotionReading {
    /// Creates a reading with a dosha signal.
    pub fn new(emotion: Emotion, confidence: f64, dosha_signal: Option<Dosha>) -> Self {
        Self {
            emotion,
            confidence,
            dosha_signal,
        }
    }

    /// Creates a neutral reading with no dosha signal.
    pub fn neutral(confidence: f64) -> Self {
        Self {
            emotion: Emotion::Neutral,
            confidence,
            dosha_signal: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_labels_are_lowercase() {
        assert_eq!(Emotion::Fear.as_str(), "fear");
        assert_eq!(format!("{}", Emotion::Sadness), "sadness");
    }

    #[test]
    fn neutral_reading_has_no_dosha_signal() {
        let reading = EmotionReading::neutral(0.5);
        assert_eq!(reading.emotion, Emotion::Neutral);
        assert!(reading.dosha_signal.is_none());
    }

    #[test]
    fn reading_serializes_with_lowercase_emotion() {
        let reading = EmotionReading::new(Emotion::Anger, 0.5, Some(Dosha::Pitta));
        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("\"anger\""));
        assert!(json.contains("\"Pitta\""));
    }
}
