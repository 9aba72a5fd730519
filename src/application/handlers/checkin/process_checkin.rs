//! ProcessCheckinHandler - Command handler for one check-in turn.
//!
//! Pipeline: load recent history, read the emotion, pick the response
//! register, build the companion prompt, call the LLM, persist the turn.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::checkin::{
    build_checkin_prompt, CheckinError, CheckinMessage, EmotionReading, PromptContext,
    ResponseMode,
};
use crate::domain::dosha::Dosha;
use crate::domain::foundation::UserId;
use crate::ports::{ChatMessage, ChatRequest, ConversationRepository, EmotionAnalyzer, LlmProvider};

/// How many prior turns are replayed into the prompt.
const HISTORY_LIMIT: usize = 6;

/// Reply length and sampling defaults for the companion register.
const MAX_REPLY_TOKENS: u32 = 300;
const REPLY_TEMPERATURE: f32 = 0.7;

/// Command for one check-in turn.
#[derive(Debug, Clone)]
pub struct ProcessCheckinCommand {
    pub user_id: UserId,
    pub text: String,
    /// What the companion calls the user.
    pub nickname: Option<String>,
    /// Baseline constitution from a completed assessment, if any.
    pub prakriti: Option<Dosha>,
}

/// Result of a processed check-in turn.
#[derive(Debug, Clone)]
pub struct ProcessCheckinResult {
    pub reply: String,
    pub emotion: EmotionReading,
    pub mode: ResponseMode,
    pub message: CheckinMessage,
}

/// Handler for check-in turns.
pub struct ProcessCheckinHandler {
    conversations: Arc<dyn ConversationRepository>,
    emotion: Arc<dyn EmotionAnalyzer>,
    llm: Arc<dyn LlmProvider>,
}

impl ProcessCheckinHandler {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        emotion: Arc<dyn EmotionAnalyzer>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            conversations,
            emotion,
            llm,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessCheckinCommand,
    ) -> Result<ProcessCheckinResult, CheckinError> {
        if cmd.text.trim().is_empty() {
            return Err(CheckinError::validation("text", "Message must not be empty"));
        }

        let history = self
            .conversations
            .recent_for_user(&cmd.user_id, HISTORY_LIMIT)
            .await?;

        let reading = self.emotion.analyze(&cmd.text).await?;
        let mode = ResponseMode::detect(&cmd.text);

        if mode == ResponseMode::Psychologist {
            warn!(user_id = %cmd.user_id, "Crisis signals detected, switching register");
        }

        let ctx = PromptContext {
            nickname: cmd.nickname.as_deref().unwrap_or("friend"),
            prakriti: cmd.prakriti,
            reading: &reading,
            mode,
            history: &history,
        };
        let system_prompt = build_checkin_prompt(&ctx, &cmd.text);

        let request = ChatRequest::new(vec![ChatMessage::user(&cmd.text)])
            .with_system_prompt(system_prompt)
            .with_max_tokens(MAX_REPLY_TOKENS)
            .with_temperature(REPLY_TEMPERATURE);

        let response = self.llm.complete(request).await?;

        let message = CheckinMessage::new(
            cmd.user_id,
            cmd.text,
            response.content.clone(),
            reading.clone(),
            mode,
        );
        self.conversations.save(&message).await?;

        info!(
            message_id = %message.id,
            emotion = %reading.emotion,
            mode = %mode,
            "Check-in turn processed"
        );

        Ok(ProcessCheckinResult {
            reply: response.content,
            emotion: reading,
            mode,
            message,
        })
    }
}
