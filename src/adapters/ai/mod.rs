//! AI provider adapters.

mod mock_provider;
mod openai_provider;

pub use mock_provider::MockLlmProvider;
pub use openai_provider::{OpenAiConfig, OpenAiProvider};
