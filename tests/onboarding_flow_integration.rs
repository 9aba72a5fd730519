//! Integration tests for the full assessment and check-in flows.
//!
//! These tests run the application handlers against the in-memory
//! adapters, exercising the same wiring the server assembles at startup.

use std::collections::HashMap;
use std::sync::Arc;

use sama_wellness::adapters::ai::MockLlmProvider;
use sama_wellness::adapters::emotion::KeywordEmotionAnalyzer;
use sama_wellness::adapters::memory::{
    InMemoryConversationRepository, InMemoryOnboardingRepository,
};
use sama_wellness::application::handlers::checkin::{ProcessCheckinCommand, ProcessCheckinHandler};
use sama_wellness::application::handlers::onboarding::{
    GetAssessmentHandler, GetAssessmentQuery, StartOnboardingCommand, StartOnboardingHandler,
    SubmitPhase1Command, SubmitPhase1Handler, SubmitPhase2Command, SubmitPhase2Handler,
};
use sama_wellness::domain::checkin::{Emotion, ResponseMode};
use sama_wellness::domain::dosha::{Certainty, Dosha, PreliminaryPattern};
use sama_wellness::domain::foundation::{OnboardingSessionId, UserId};
use sama_wellness::domain::onboarding::{OnboardingError, OnboardingPhase};

fn test_user() -> UserId {
    UserId::new("integration-user").unwrap()
}

fn answers(range: std::ops::RangeInclusive<u32>, key: &str) -> HashMap<String, String> {
    range.map(|n| (format!("q{}", n), key.to_string())).collect()
}

struct OnboardingFixture {
    start: StartOnboardingHandler,
    phase1: SubmitPhase1Handler,
    phase2: SubmitPhase2Handler,
    get: GetAssessmentHandler,
}

impl OnboardingFixture {
    fn new() -> Self {
        let repo = Arc::new(InMemoryOnboardingRepository::new());
        Self {
            start: StartOnboardingHandler::new(repo.clone()),
            phase1: SubmitPhase1Handler::new(repo.clone()),
            phase2: SubmitPhase2Handler::new(repo.clone()),
            get: GetAssessmentHandler::new(repo),
        }
    }
}

#[tokio::test]
async fn full_two_phase_flow_produces_consistent_result() {
    let fixture = OnboardingFixture::new();

    // Start: five phase-1 questions come back
    let started = fixture
        .start
        .handle(StartOnboardingCommand {
            user_id: test_user(),
        })
        .await
        .unwrap();
    assert_eq!(started.session.phase(), OnboardingPhase::AwaitingPhase1);
    assert_eq!(started.questions.len(), 5);

    // Phase 1: all answers lean Vata
    let phase1 = fixture
        .phase1
        .handle(SubmitPhase1Command {
            session_id: *started.session.id(),
            user_id: test_user(),
            answers: answers(1..=5, "a"),
        })
        .await
        .unwrap();
    assert_eq!(phase1.pattern, PreliminaryPattern::Leaning(Dosha::Vata));
    assert_eq!(phase1.questions.len(), 10);

    // Phase 2: keep leaning Vata; the final read is high certainty
    let finalized = fixture
        .phase2
        .handle(SubmitPhase2Command {
            session_id: *started.session.id(),
            user_id: test_user(),
            answers: answers(6..=15, "a"),
        })
        .await
        .unwrap();
    assert_eq!(finalized.session.phase(), OnboardingPhase::Complete);
    assert_eq!(finalized.result.percentage(Dosha::Vata), 100.0);
    assert_eq!(finalized.result.classification.certainty, Certainty::High);

    // The polling endpoint sees the stored final result
    let fetched = fixture
        .get
        .handle(GetAssessmentQuery {
            session_id: *started.session.id(),
        })
        .await
        .unwrap();
    assert!(fetched.is_complete());
    assert_eq!(fetched.final_result(), Some(&finalized.result));
}

#[tokio::test]
async fn mixed_answers_produce_percentages_that_sum_to_100() {
    let fixture = OnboardingFixture::new();

    let started = fixture
        .start
        .handle(StartOnboardingCommand {
            user_id: test_user(),
        })
        .await
        .unwrap();

    let mut phase1_answers = answers(1..=3, "a");
    phase1_answers.extend(answers(4..=5, "b"));
    fixture
        .phase1
        .handle(SubmitPhase1Command {
            session_id: *started.session.id(),
            user_id: test_user(),
            answers: phase1_answers,
        })
        .await
        .unwrap();

    let mut phase2_answers = answers(6..=10, "b");
    phase2_answers.extend(answers(11..=15, "c"));
    let finalized = fixture
        .phase2
        .handle(SubmitPhase2Command {
            session_id: *started.session.id(),
            user_id: test_user(),
            answers: phase2_answers,
        })
        .await
        .unwrap();

    let sum: f64 = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha]
        .iter()
        .map(|d| finalized.result.percentage(*d))
        .sum();
    assert!((sum - 100.0).abs() <= 0.1 + 1e-9, "sum was {}", sum);
}

#[tokio::test]
async fn skipping_phase1_is_rejected() {
    let fixture = OnboardingFixture::new();

    let started = fixture
        .start
        .handle(StartOnboardingCommand {
            user_id: test_user(),
        })
        .await
        .unwrap();

    let result = fixture
        .phase2
        .handle(SubmitPhase2Command {
            session_id: *started.session.id(),
            user_id: test_user(),
            answers: answers(6..=15, "a"),
        })
        .await;
    assert!(matches!(result, Err(OnboardingError::InvalidPhase(_))));
}

#[tokio::test]
async fn unknown_session_reports_not_found() {
    let fixture = OnboardingFixture::new();

    let result = fixture
        .get
        .handle(GetAssessmentQuery {
            session_id: OnboardingSessionId::new(),
        })
        .await;
    assert!(matches!(result, Err(OnboardingError::NotFound(_))));
}

#[tokio::test]
async fn checkin_flow_detects_emotion_and_keeps_history() {
    let conversations = Arc::new(InMemoryConversationRepository::new());
    let llm = Arc::new(MockLlmProvider::new("That sounds heavy. Want to talk about it?"));
    let handler = ProcessCheckinHandler::new(
        conversations.clone(),
        Arc::new(KeywordEmotionAnalyzer::new()),
        llm.clone(),
    );

    let first = handler
        .handle(ProcessCheckinCommand {
            user_id: test_user(),
            text: "feeling anxious about my exam".to_string(),
            nickname: None,
            prakriti: Some(Dosha::Vata),
        })
        .await
        .unwrap();
    assert_eq!(first.emotion.emotion, Emotion::Fear);
    assert_eq!(first.emotion.dosha_signal, Some(Dosha::Vata));
    assert_eq!(first.mode, ResponseMode::Friend);
    assert_eq!(first.reply, "That sounds heavy. Want to talk about it?");

    let second = handler
        .handle(ProcessCheckinCommand {
            user_id: test_user(),
            text: "still worried".to_string(),
            nickname: None,
            prakriti: Some(Dosha::Vata),
        })
        .await
        .unwrap();
    assert_eq!(second.emotion.emotion, Emotion::Fear);
    assert_eq!(conversations.len(), 2);

    // The second prompt replays the first turn
    let requests = llm.recorded_requests();
    let prompt = requests[1].system_prompt.as_deref().unwrap();
    assert!(prompt.contains("feeling anxious about my exam"));
}

#[tokio::test]
async fn crisis_language_switches_to_psychologist_mode() {
    let conversations = Arc::new(InMemoryConversationRepository::new());
    let llm = Arc::new(MockLlmProvider::default());
    let handler = ProcessCheckinHandler::new(
        conversations,
        Arc::new(KeywordEmotionAnalyzer::new()),
        llm.clone(),
    );

    let result = handler
        .handle(ProcessCheckinCommand {
            user_id: test_user(),
            text: "everything feels hopeless lately".to_string(),
            nickname: None,
            prakriti: None,
        })
        .await
        .unwrap();
    assert_eq!(result.mode, ResponseMode::Psychologist);

    let requests = llm.recorded_requests();
    let prompt = requests[0].system_prompt.as_deref().unwrap();
    assert!(prompt.contains("PSYCHOLOGIST MODE"));
}
