//! Ports layer - trait contracts between the domain and the outside world.

mod conversation_repository;
mod emotion_analyzer;
mod llm_provider;
mod onboarding_repository;

pub use conversation_repository::ConversationRepository;
pub use emotion_analyzer::EmotionAnalyzer;
pub use llm_provider::{
    ChatMessage, ChatRequest, ChatResponse, ChatRole, LlmError, LlmProvider, ProviderInfo,
    TokenUsage,
};
pub use onboarding_repository::OnboardingRepository;
