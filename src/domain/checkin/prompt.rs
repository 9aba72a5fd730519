//! Check-in prompt construction.
//!
//! Pure string templating: embeds the companion instructions, the user's
//! constitution context, the detected emotional state, and recent
//! conversation turns into a single system prompt for the LLM.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::dosha::Dosha;

use super::{CheckinMessage, EmotionReading};

/// Base companion instructions sent with every check-in prompt.
pub const SYSTEM_INSTRUCTIONS: &str = "\
You are SAMA, a friendly, empathetic mental wellness companion.

Always respond like a close caring friend having a natural chat.

FRIEND MODE RULES:
- Warm, simple, everyday language in short responses (1-2 sentences preferred)
- Casual and conversational tone with no clinical or formal wording

WHEN TO ASK QUESTIONS:
- If the user shares only a feeling without context, ask ONE gentle follow-up question.
- If the user already explained the reason, do NOT ask more questions.

WHEN TO GIVE AYURVEDA SUGGESTIONS:
- Give ONE small, simple Ayurveda-friendly suggestion ONLY when:
  a) the user explicitly asks for help/suggestions, OR
  b) the user has clearly explained the reason for their feeling.

AYURVEDIC SUGGESTIONS GUIDELINES:
1. VATA: warm tea, deep breaths, warm food, self-massage, slow walk, cozy blanket, meditation
2. PITTA: cool water, fresh air, calming music, cool drinks, shade, creative activity, quiet time
3. KAPHA: movement/walk, fresh air, energizing music, ginger tea, stretching, social connection, upbeat content

OVERRIDE PRIORITY RULE:
- If the user explicitly asks for an Ayurvedic suggestion, ALWAYS give one.
- If the user explicitly says no suggestions, NEVER give suggestions unless they later ask again.

SAFETY MODE (Psychologist Mode):
Switch to a more serious professional tone ONLY if the user shows signs of crisis,
self-harm, hopelessness, or emotional danger.";

/// Keywords that switch the reply into the serious, professional register.
const CRISIS_KEYWORDS: &[&str] = &[
    "panic",
    "hopeless",
    "depressed",
    "suicide",
    "self harm",
    "kill myself",
    "can't go on",
    "worthless",
    "hate myself",
    "no reason to live",
    "overwhelmed",
    "breakdown",
];

/// Register the companion replies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Casual, warm companion register.
    Friend,
    /// Serious professional register for crisis signals.
    Psychologist,
}

impl ResponseMode {
    /// Selects the response mode from the user's message text.
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        if CRISIS_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            ResponseMode::Psychologist
        } else {
            ResponseMode::Friend
        }
    }

    /// Returns the prompt directive for this mode.
    pub fn directive(&self) -> &'static str {
        match self {
            ResponseMode::Friend => "FRIEND MODE",
            ResponseMode::Psychologist => "PSYCHOLOGIST MODE",
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.directive())
    }
}

/// User and session context embedded into the prompt.
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    /// What the companion calls the user.
    pub nickname: &'a str,
    /// Baseline constitution, if onboarding is complete.
    pub prakriti: Option<Dosha>,
    /// Emotion detected in the current message.
    pub reading: &'a EmotionReading,
    /// Selected response register.
    pub mode: ResponseMode,
    /// Recent conversation turns, oldest first.
    pub history: &'a [CheckinMessage],
}

/// Builds the full system prompt for one check-in turn.
pub fn build_checkin_prompt(ctx: &PromptContext<'_>, user_text: &str) -> String {
    let mut prompt = String::from(SYSTEM_INSTRUCTIONS);

    prompt.push_str(&format!("\n\nREQUIRED RESPONSE MODE: {}\n", ctx.mode));

    prompt.push_str("\nUser Profile:\n");
    prompt.push_str(&format!("- Nickname: {}. Use when appropriate.\n", ctx.nickname));
    match ctx.prakriti {
        Some(dosha) => prompt.push_str(&format!("- Prakriti (constant): {}\n", dosha)),
        None => prompt.push_str("- Prakriti (constant): not yet assessed\n"),
    }

    prompt.push_str(&format!(
        "\nDetected Emotional State:\n- Emotion: {} (confidence {:.0}%)\n",
        ctx.reading.emotion,
        ctx.reading.confidence * 100.0
    ));
    if let Some(dosha) = ctx.reading.dosha_signal {
        prompt.push_str(&format!("- Current imbalance leans: {}\n", dosha));
    }

    if !ctx.history.is_empty() {
        prompt.push_str("\nCurrent Session Context:\n");
        for msg in ctx.history {
            prompt.push_str(&format!("User: {}\n", msg.user_text));
            prompt.push_str(&format!("SAMA: {}\n", msg.reply));
        }
    }

    prompt.push_str(&format!("\nUser's Last Message: \"{}\"\n", user_text));
    prompt.push_str("\nNow reply as SAMA in the required mode.\n");

    prompt
}
