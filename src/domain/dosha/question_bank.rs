//! Static assessment question bank.
//!
//! Fifteen fixed questions: five Tier-1 (physical) questions issued in
//! phase 1, then five Tier-2 (physiological) and five Tier-3 (behavioral)
//! questions issued in phase 2. The bank is immutable and safe for
//! unsynchronized concurrent reads.

use once_cell::sync::Lazy;

use super::{Dosha, PreliminaryPattern, Question, Tier};

static PHASE1_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question::new(
            "q1",
            Tier::Physical,
            "How would you describe your natural body frame?",
            Some("Consider your lifelong build, not recent changes."),
            &[
                ("a", "Thin, lean, hard to gain weight", Dosha::Vata),
                ("b", "Medium build, athletic, moderate weight", Dosha::Pitta),
                ("c", "Large frame, solid build, easy to gain weight", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q2",
            Tier::Physical,
            "What is your skin's natural tendency?",
            Some("Think about your skin without products."),
            &[
                ("a", "Dry, rough, thin, flaky", Dosha::Vata),
                ("b", "Warm, oily, prone to redness", Dosha::Pitta),
                ("c", "Moist, smooth, thick, hydrated", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q3",
            Tier::Physical,
            "How would you describe your natural hair?",
            Some("Without treatments or products."),
            &[
                ("a", "Dry, coarse, frizzy, thin", Dosha::Vata),
                ("b", "Fine, straight, oily, early graying", Dosha::Pitta),
                ("c", "Thick, lustrous, wavy, oily", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q4",
            Tier::Physical,
            "What is your lifelong weight pattern?",
            Some("Overall tendency throughout adulthood."),
            &[
                ("a", "Underweight, hard to gain", Dosha::Vata),
                ("b", "Moderate, gain/lose easily", Dosha::Pitta),
                ("c", "Overweight, hard to lose", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q5",
            Tier::Physical,
            "How would you describe your joints?",
            Some("Natural joint characteristics."),
            &[
                ("a", "Small, prominent, crack easily", Dosha::Vata),
                ("b", "Medium, flexible, moderate", Dosha::Pitta),
                ("c", "Large, well-padded, stable", Dosha::Kapha),
            ],
        ),
    ]
});

static PHASE2_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question::new(
            "q6",
            Tier::Physiological,
            "How is your digestion typically?",
            None,
            &[
                ("a", "Variable, bloating, gas", Dosha::Vata),
                ("b", "Strong, fast, burns hot", Dosha::Pitta),
                ("c", "Slow, heavy after eating", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q7",
            Tier::Physiological,
            "How is your sleep pattern?",
            None,
            &[
                ("a", "Light, interrupted, hard to fall asleep", Dosha::Vata),
                ("b", "Moderate, wake refreshed", Dosha::Pitta),
                ("c", "Deep, long, hard to wake", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q8",
            Tier::Physiological,
            "How is your energy throughout the day?",
            None,
            &[
                ("a", "Bursts then crashes, variable", Dosha::Vata),
                ("b", "High and steady when fueled", Dosha::Pitta),
                ("c", "Steady and enduring", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q9",
            Tier::Physiological,
            "Body temperature preference?",
            None,
            &[
                ("a", "Always cold, need warmth", Dosha::Vata),
                ("b", "Run hot, prefer cool", Dosha::Pitta),
                ("c", "Comfortable in most temps", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q10",
            Tier::Physiological,
            "How is your appetite?",
            None,
            &[
                ("a", "Variable, forget to eat", Dosha::Vata),
                ("b", "Strong, angry when hungry", Dosha::Pitta),
                ("c", "Low, can skip meals", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q11",
            Tier::Behavioral,
            "How do you handle stress?",
            None,
            &[
                ("a", "Anxious, worried, restless", Dosha::Vata),
                ("b", "Irritable, frustrated, angry", Dosha::Pitta),
                ("c", "Withdrawn, sad, avoidant", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q12",
            Tier::Behavioral,
            "How do you make decisions?",
            None,
            &[
                ("a", "Quickly but change mind, indecisive", Dosha::Vata),
                ("b", "Decisively and stick to it", Dosha::Pitta),
                ("c", "Slowly, need time", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q13",
            Tier::Behavioral,
            "How is your memory?",
            None,
            &[
                ("a", "Quick to learn, quick to forget", Dosha::Vata),
                ("b", "Sharp and focused", Dosha::Pitta),
                ("c", "Slow to learn, long retention", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q14",
            Tier::Behavioral,
            "How do you speak?",
            None,
            &[
                ("a", "Fast, talk a lot, jump topics", Dosha::Vata),
                ("b", "Clear, direct, precise", Dosha::Pitta),
                ("c", "Slow, thoughtful, deliberate", Dosha::Kapha),
            ],
        ),
        Question::new(
            "q15",
            Tier::Behavioral,
            "New activities approach?",
            None,
            &[
                ("a", "Excited, enthusiastic, don't finish", Dosha::Vata),
                ("b", "Goal-oriented, competitive", Dosha::Pitta),
                ("c", "Cautious, need encouragement", Dosha::Kapha),
            ],
        ),
    ]
});

/// Returns the five Tier-1 questions issued in phase 1, in order.
pub fn phase1_questions() -> &'static [Question] {
    &PHASE1_QUESTIONS
}

/// Returns the ten Tier-2/Tier-3 questions issued in phase 2, in order.
///
/// The preliminary pattern is accepted for API compatibility but does not
/// vary the returned set. Personalization by leaning was planned upstream
/// and never wired; the fixed set is the contract until product intent
/// changes.
pub fn phase2_questions(_pattern: &PreliminaryPattern) -> &'static [Question] {
    &PHASE2_QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase1_has_five_tier1_questions() {
        let questions = phase1_questions();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.tier() == Tier::Physical));
    }

    #[test]
    fn phase2_has_five_tier2_then_five_tier3_questions() {
        let questions = phase2_questions(&PreliminaryPattern::Balanced);
        assert_eq!(questions.len(), 10);
        assert!(questions[..5].iter().all(|q| q.tier() == Tier::Physiological));
        assert!(questions[5..].iter().all(|q| q.tier() == Tier::Behavioral));
    }

    #[test]
    fn question_ids_are_sequential_and_unique() {
        let all: Vec<&str> = phase1_questions()
            .iter()
            .chain(phase2_questions(&PreliminaryPattern::Balanced))
            .map(|q| q.id())
            .collect();
        let expected: Vec<String> = (1..=15).map(|n| format!("q{}", n)).collect();
        assert_eq!(all, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn every_question_offers_one_option_per_dosha() {
        for q in phase1_questions()
            .iter()
            .chain(phase2_questions(&PreliminaryPattern::Balanced))
        {
            assert_eq!(q.options().len(), 3, "question {}", q.id());
            for dosha in Dosha::ALL {
                assert_eq!(
                    q.options().iter().filter(|o| o.dosha == dosha).count(),
                    1,
                    "question {} should map exactly one option to {}",
                    q.id(),
                    dosha
                );
            }
        }
    }

    #[test]
    fn phase2_set_is_identical_regardless_of_pattern() {
        // Pattern-independence is current behavior; this test makes any
        // future personalization a deliberate, visible change.
        let balanced = phase2_questions(&PreliminaryPattern::Balanced);
        for dosha in Dosha::ALL {
            let leaning = phase2_questions(&PreliminaryPattern::Leaning(dosha));
            assert_eq!(balanced, leaning);
        }
    }
}
