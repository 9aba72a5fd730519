//! Questionnaire question and answer option definitions.

use serde::{Deserialize, Serialize};

use super::Dosha;

/// Reliability tier assigned to a question.
///
/// Physical traits are considered the most reliable constitution signal,
/// behavioral traits the most context-dependent. The tier determines the
/// weight an answer contributes to the tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Physical,
    Physiological,
    Behavioral,
}

impl Tier {
    /// Returns the tier number (1-3) used in API payloads.
    pub fn number(&self) -> u8 {
        match self {
            Tier::Physical => 1,
            Tier::Physiological => 2,
            Tier::Behavioral => 3,
        }
    }

    /// Returns the scoring weight for answers to questions of this tier.
    pub fn weight(&self) -> u32 {
        match self {
            Tier::Physical => 5,
            Tier::Physiological => 3,
            Tier::Behavioral => 2,
        }
    }
}

/// One selectable answer, mapping to exactly one dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Option key as submitted by clients ("a", "b", "c").
    pub key: String,
    /// Display text for the option.
    pub text: String,
    /// Dosha this option counts toward.
    pub dosha: Dosha,
}

/// A single multiple-choice question from the assessment bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    tier: Tier,
    prompt: String,
    instruction: Option<String>,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Builds a question from static bank data.
    pub fn new(
        id: &str,
        tier: Tier,
        prompt: &str,
        instruction: Option<&str>,
        options: &[(&str, &str, Dosha)],
    ) -> Self {
        Self {
            id: id.to_string(),
            tier,
            prompt: prompt.to_string(),
            instruction: instruction.map(str::to_string),
            options: options
                .iter()
                .map(|(key, text, dosha)| AnswerOption {
                    key: (*key).to_string(),
                    text: (*text).to_string(),
                    dosha: *dosha,
                })
                .collect(),
        }
    }

    /// Returns the question id ("q1".."q15").
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the reliability tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Returns the question prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the optional answering instruction.
    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    /// Returns the answer options in display order.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Looks up an option by its key, returning `None` for unknown keys.
    pub fn option(&self, key: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.key == key)
    }

    /// Returns the scoring weight of this question's tier.
    pub fn weight(&self) -> u32 {
        self.tier.weight()
    }
}
