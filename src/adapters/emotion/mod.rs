//! Emotion analysis adapters.

mod keyword_analyzer;

pub use keyword_analyzer::KeywordEmotionAnalyzer;
