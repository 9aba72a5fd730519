//! HTTP DTOs for check-in endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::checkin::ProcessCheckinResult;

/// Request for one check-in turn.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckinRequest {
    pub user_id: String,
    pub text: String,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Baseline constitution ("vata", "pitta", "kapha"), if known.
    #[serde(default)]
    pub prakriti: Option<String>,
}

/// Companion reply for one check-in turn.
#[derive(Debug, Clone, Serialize)]
pub struct CheckinResponse {
    pub message_id: String,
    pub reply: String,
    pub emotion: String,
    pub emotion_confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosha_signal: Option<String>,
    pub mode: String,
}

impl From<ProcessCheckinResult> for CheckinResponse {
    fn from(result: ProcessCheckinResult) -> Self {
        Self {
            message_id: result.message.id.to_string(),
            reply: result.reply,
            emotion: result.emotion.emotion.to_string(),
            emotion_confidence: result.emotion.confidence,
            dosha_signal: result.emotion.dosha_signal.map(|d| d.key().to_string()),
            mode: result.mode.directive().to_string(),
        }
    }
}
