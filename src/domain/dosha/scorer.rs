//! Weighted dosha scoring and classification.
//!
//! Pure computation over an answers mapping and the static question bank.
//! Malformed input never raises: unknown question ids and option keys are
//! skipped, and an empty tally degrades to the balanced default.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::question_bank::{phase1_questions, phase2_questions};
use super::{Dosha, Question};

/// Margin at or above which the primary dosha stands alone.
const SINGLE_DOMINANT_MARGIN: f64 = 15.0;

/// Margin at or above which a single-dominant result is high certainty.
const HIGH_CERTAINTY_MARGIN: f64 = 20.0;

/// Margin at or above which the top two doshas form a dual type.
const DUAL_DOSHA_MARGIN: f64 = 10.0;

/// Percentage above which a phase-1 leaning is recorded.
const LEANING_THRESHOLD: f64 = 40.0;

/// Which question set a scoring call runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionnairePhase {
    /// Phase-1 questions only (preliminary scoring).
    Phase1,
    /// The full fifteen-question set (final scoring).
    Final,
}

/// Preliminary constitution leaning derived after phase 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PreliminaryPattern {
    /// One dosha scored above the leaning threshold.
    Leaning(Dosha),
    /// No dosha stood out.
    Balanced,
}

impl fmt::Display for PreliminaryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreliminaryPattern::Leaning(dosha) => write!(f, "{}_leaning", dosha.key()),
            PreliminaryPattern::Balanced => write!(f, "balanced"),
        }
    }
}

impl FromStr for PreliminaryPattern {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "balanced" {
            return Ok(PreliminaryPattern::Balanced);
        }
        match s.strip_suffix("_leaning") {
            Some(prefix) => Ok(PreliminaryPattern::Leaning(prefix.parse()?)),
            None => Err(ValidationError::invalid_format(
                "preliminary_pattern",
                format!("Unknown pattern: {}", s),
            )),
        }
    }
}

impl From<PreliminaryPattern> for String {
    fn from(pattern: PreliminaryPattern) -> Self {
        pattern.to_string()
    }
}

impl TryFrom<String> for PreliminaryPattern {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Accumulated integer weights per dosha.
///
/// Recomputed fresh on every scoring call, never mutated across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTally(BTreeMap<Dosha, u32>);

impl ScoreTally {
    /// Creates a zeroed tally for all three doshas.
    pub fn new() -> Self {
        Self(Dosha::ALL.iter().map(|d| (*d, 0)).collect())
    }

    /// Adds weight to a dosha's tally.
    pub fn add(&mut self, dosha: Dosha, weight: u32) {
        *self.0.entry(dosha).or_insert(0) += weight;
    }

    /// Returns the accumulated weight for a dosha.
    pub fn get(&self, dosha: Dosha) -> u32 {
        self.0.get(&dosha).copied().unwrap_or(0)
    }

    /// Returns the sum of all tallies.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Returns doshas ranked by tally descending.
    ///
    /// The sort is stable, so ties resolve in canonical order
    /// (Vata, Pitta, Kapha).
    pub fn ranked(&self) -> Vec<(Dosha, u32)> {
        let mut ranked: Vec<(Dosha, u32)> =
            Dosha::ALL.iter().map(|d| (*d, self.get(*d))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Returns the highest-scored dosha (ties resolve in canonical order).
    pub fn leader(&self) -> Dosha {
        self.ranked()[0].0
    }

    /// Computes percentages rounded to one decimal place.
    ///
    /// A zero total yields the balanced default of 33.3 per dosha.
    pub fn percentages(&self) -> BTreeMap<Dosha, f64> {
        let total = self.total();
        Dosha::ALL
            .iter()
            .map(|d| {
                let pct = if total == 0 {
                    33.3
                } else {
                    round1(f64::from(self.get(*d)) / f64::from(total) * 100.0)
                };
                (*d, pct)
            })
            .collect()
    }

    /// Returns the underlying map keyed by dosha.
    pub fn as_map(&self) -> &BTreeMap<Dosha, u32> {
        &self.0
    }
}

impl Default for ScoreTally {
    fn default() -> Self {
        Self::new()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Certainty of a classification, monotone in the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Certainty {
    High,
    Moderate,
    Low,
}

impl Certainty {
    /// Returns the lowercase label used in interpretations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Certainty::High => "high",
            Certainty::Moderate => "moderate",
            Certainty::Low => "low",
        }
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape of the final classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationType {
    SingleDominant,
    DualDosha,
    Tridoshic,
}

/// Classification of a scored answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Shape of the result (single dominant, dual, tridoshic).
    #[serde(rename = "type")]
    pub kind: ClassificationType,
    /// Human-readable constitution label ("Vata-dominant", "Vata-Pitta", ...).
    pub label: String,
    /// Margin-derived certainty.
    pub certainty: Certainty,
    /// Confidence in [0, 1]; margin/100 except for the tridoshic floor of 0.1.
    pub confidence: f64,
}

/// Complete result of one scoring call. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Raw weighted tallies per dosha.
    pub scores: ScoreTally,
    /// Percentages per dosha, one decimal place, summing to 100 within rounding.
    pub percentages: BTreeMap<Dosha, f64>,
    /// Derived classification.
    pub classification: Classification,
    /// Formatted sentence embedding label and certainty.
    pub interpretation: String,
}

impl ScoreResult {
    /// Returns the percentage for a dosha.
    pub fn percentage(&self, dosha: Dosha) -> f64 {
        self.percentages.get(&dosha).copied().unwrap_or(0.0)
    }
}

/// Weighted tally scorer over the static question bank.
pub struct DoshaScorer;

impl DoshaScorer {
    /// Scores an answers mapping against the active question set.
    ///
    /// Pure function of its inputs: identical inputs yield identical
    /// output. Unanswered questions and unrecognized option keys are
    /// skipped silently; an empty or fully-invalid mapping produces the
    /// balanced tridoshic default.
    pub fn calculate(answers: &HashMap<String, String>, phase: QuestionnairePhase) -> ScoreResult {
        let mut tally = ScoreTally::new();

        for question in Self::active_questions(phase) {
            if let Some(key) = answers.get(question.id()) {
                if let Some(option) = question.option(key) {
                    tally.add(option.dosha, question.weight());
                }
            }
        }

        let percentages = tally.percentages();
        let ranked = tally.ranked();
        let primary = ranked[0].0;
        let secondary = ranked[1].0;

        let primary_pct = percentages[&primary];
        let secondary_pct = percentages[&secondary];
        let margin = primary_pct - secondary_pct;

        let classification = if margin >= SINGLE_DOMINANT_MARGIN {
            Classification {
                kind: ClassificationType::SingleDominant,
                label: format!("{}-dominant", primary),
                certainty: if margin >= HIGH_CERTAINTY_MARGIN {
                    Certainty::High
                } else {
                    Certainty::Moderate
                },
                confidence: margin / 100.0,
            }
        } else if margin >= DUAL_DOSHA_MARGIN {
            Classification {
                kind: ClassificationType::DualDosha,
                label: format!("{}-{}", primary, secondary),
                certainty: Certainty::Moderate,
                confidence: margin / 100.0,
            }
        } else {
            Classification {
                kind: ClassificationType::Tridoshic,
                label: "Balanced (Tridoshic)".to_string(),
                certainty: Certainty::Low,
                confidence: 0.1,
            }
        };

        let interpretation = format!(
            "You have a {} constitution with {} certainty.",
            classification.label, classification.certainty
        );

        ScoreResult {
            scores: tally,
            percentages,
            classification,
            interpretation,
        }
    }

    /// Derives the preliminary pattern from a phase-1 score.
    ///
    /// The leaning is recorded when the top-scored dosha exceeds 40% of
    /// the tally; otherwise the pattern is balanced.
    pub fn preliminary_pattern(result: &ScoreResult) -> PreliminaryPattern {
        let leader = result.scores.leader();
        if result.percentage(leader) > LEANING_THRESHOLD {
            PreliminaryPattern::Leaning(leader)
        } else {
            PreliminaryPattern::Balanced
        }
    }

    fn active_questions(phase: QuestionnairePhase) -> Vec<&'static Question> {
        match phase {
            QuestionnairePhase::Phase1 => phase1_questions().iter().collect(),
            QuestionnairePhase::Final => phase1_questions()
                .iter()
                .chain(phase2_questions(&PreliminaryPattern::Balanced))
                .collect(),
        }
    }
}
