//! Mock LLM provider for tests and offline development.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{ChatRequest, ChatResponse, LlmError, LlmProvider, ProviderInfo};

/// LLM provider that returns a canned reply and records every request
/// it receives, so tests can assert on the prompts that were built.
pub struct MockLlmProvider {
    reply: String,
    fail_with: Option<LlmError>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockLlmProvider {
    /// Creates a provider that always answers with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail_with: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a provider that always fails with the given error.
    pub fn failing(error: LlmError) -> Self {
        Self {
            reply: String::new(),
            fail_with: Some(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of every request received so far.
    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockLlmProvider {
    fn default() -> Self {
        Self::new("I'm here with you. How are you feeling right now?")
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        self.requests.lock().unwrap().push(request);
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        Ok(ChatResponse {
            content: self.reply.clone(),
            model: "mock".to_string(),
            usage: None,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "mock",
            model: "mock".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ChatMessage;

    #[tokio::test]
    async fn returns_canned_reply_and_records_request() {
        let provider = MockLlmProvider::new("hello there");
        let request = ChatRequest::new(vec![ChatMessage::user("hi")]);

        let response = provider.complete(request.clone()).await.unwrap();
        assert_eq!(response.content, "hello there");
        assert_eq!(provider.recorded_requests(), vec![request]);
    }

    #[tokio::test]
    async fn failing_provider_returns_configured_error() {
        let provider = MockLlmProvider::failing(LlmError::RateLimited);
        let request = ChatRequest::new(vec![ChatMessage::user("hi")]);

        let err = provider.complete(request).await.unwrap_err();
        assert_eq!(err, LlmError::RateLimited);
        assert_eq!(provider.recorded_requests().len(), 1);
    }
}
