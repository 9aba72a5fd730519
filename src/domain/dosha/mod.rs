//! Dosha assessment domain - question bank, weighted scorer, classification.

mod category;
mod question;
pub mod question_bank;
mod scorer;

pub use category::Dosha;
pub use question::{AnswerOption, Question, Tier};
pub use question_bank::{phase1_questions, phase2_questions};
pub use scorer::{
    Certainty, Classification, ClassificationType, DoshaScorer, PreliminaryPattern,
    QuestionnairePhase, ScoreResult, ScoreTally,
};
