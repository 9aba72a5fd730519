//! Check-in domain - emotion readings, prompt construction, conversation turns.

mod emotion;
mod errors;
mod message;
mod prompt;

pub use emotion::{Emotion, EmotionReading};
pub use errors::CheckinError;
pub use message::CheckinMessage;
pub use prompt::{build_checkin_prompt, PromptContext, ResponseMode, SYSTEM_INSTRUCTIONS};
