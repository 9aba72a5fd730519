//! In-memory persistence adapters.

mod conversation_repository;
mod onboarding_repository;

pub use conversation_repository::InMemoryConversationRepository;
pub use onboarding_repository::InMemoryOnboardingRepository;
