use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::prelude::ReadableExt;
use lingo_core::model::{Exercise, ExerciseType, Level, PracticeKey, PracticeSet};
use services::{
    ExerciseSource, PracticePhase, SourceError, SpeechError, SpeechService, SpeechSynthesizer,
};

use super::test_harness::{
    ViewHarness, setup_practice_harness, setup_practice_harness_with_source,
    setup_practice_harness_with_speech,
};
use crate::vm::PracticeIntent;

fn key(language: &str, kind: ExerciseType, level: Level) -> PracticeKey {
    PracticeKey::parse(language, kind, level).unwrap()
}

async fn dispatch(harness: &mut ViewHarness, intent: PracticeIntent) {
    let callback = harness.handles.dispatch();
    harness.dom.in_runtime(|| callback.call(intent));
    harness.drive_async().await;
    harness.drive_async().await;
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_selector() {
    let mut harness = setup_practice_harness(key("Spanish", ExerciseType::VocabularyMatch, Level::A1));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start Practice"), "missing start button in {html}");
    assert!(html.contains("Vocabulary Match"), "missing exercise option in {html}");
    assert!(html.contains("C2"), "missing level option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_runs_fallback_match_to_completion() {
    let mut harness = setup_practice_harness(key("Spanish", ExerciseType::VocabularyMatch, Level::A1));
    harness.rebuild();

    dispatch(&mut harness, PracticeIntent::Start).await;
    let html = harness.render();
    assert!(html.contains("How to Play"), "missing instructions in {html}");
    assert!(html.contains("Match the words with their meanings"), "missing question in {html}");
    assert!(html.contains("la familia"), "missing word tile in {html}");
    assert!(html.contains("Question 1 of 1"), "missing progress in {html}");

    dispatch(&mut harness, PracticeIntent::Answer("la familia - family".into())).await;
    let html = harness.render();
    assert!(html.contains("Correct! +10 points"), "missing feedback in {html}");
    assert!(html.contains("Finish"), "missing finish button in {html}");

    dispatch(&mut harness, PracticeIntent::Next).await;
    let html = harness.render();
    assert!(html.contains("Practice complete"), "missing completion in {html}");
    assert!(html.contains("10 / 10 points"), "missing score in {html}");
    assert!(html.contains("Practice More"), "missing practice more in {html}");

    dispatch(&mut harness, PracticeIntent::PracticeMore).await;
    let controller = harness.handles.controller();
    let (phase, score) = harness
        .dom
        .in_runtime(|| (controller.peek().phase(), controller.peek().score()));
    assert_eq!(phase, PracticePhase::Active);
    assert_eq!(score, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_shows_not_available_notice() {
    let mut harness = setup_practice_harness(key("French", ExerciseType::WordPuzzle, Level::C2));
    harness.rebuild();

    dispatch(&mut harness, PracticeIntent::Start).await;
    let html = harness.render();
    assert!(html.contains("not available"), "missing notice in {html}");
    assert!(html.contains("Start Practice"), "controller should be idle in {html}");

    dispatch(&mut harness, PracticeIntent::DismissNotice).await;
    let html = harness.render();
    assert!(!html.contains("not available"), "notice should be dismissed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn changing_selection_returns_to_idle() {
    let mut harness = setup_practice_harness(key("English", ExerciseType::SentenceBuilder, Level::B1));
    harness.rebuild();

    dispatch(&mut harness, PracticeIntent::Start).await;
    assert!(harness.render().contains("Check Answer"));

    dispatch(&mut harness, PracticeIntent::SelectLevel(Level::B2)).await;
    let controller = harness.handles.controller();
    let (phase, index) = harness
        .dom
        .in_runtime(|| (controller.peek().phase(), controller.peek().current_index()));
    assert_eq!(phase, PracticePhase::Idle);
    assert_eq!(index, 0);
    assert!(harness.render().contains("Start Practice"));
}

struct ListeningRemote;

#[async_trait]
impl ExerciseSource for ListeningRemote {
    async fn fetch(&self, _key: &PracticeKey) -> Result<PracticeSet, SourceError> {
        let exercise = Exercise::new(
            ExerciseType::ListeningChallenge,
            "What did you hear?",
            vec!["bonjour".into()],
            "bonjour",
            10,
        )
        .expect("valid exercise");
        Ok(PracticeSet::new(vec![exercise], Vec::new()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn unsupported_type_renders_placeholder() {
    let mut harness = setup_practice_harness_with_source(
        key("French", ExerciseType::ListeningChallenge, Level::A1),
        Arc::new(ListeningRemote),
    );
    harness.rebuild();

    dispatch(&mut harness, PracticeIntent::Start).await;
    let html = harness.render();
    assert!(
        html.contains("Listening Challenge exercises are not implemented yet."),
        "missing placeholder in {html}"
    );
    assert!(html.contains("Skip"), "missing skip control in {html}");

    dispatch(&mut harness, PracticeIntent::Answer(String::new())).await;
    let html = harness.render();
    assert!(html.contains("Not quite. Keep practicing!"), "missing feedback in {html}");

    dispatch(&mut harness, PracticeIntent::Next).await;
    let html = harness.render();
    assert!(html.contains("Practice complete"), "missing completion in {html}");
    assert!(html.contains("0 / 10 points"), "missing score in {html}");
}

#[derive(Default)]
struct RecordingSynthesizer {
    spoken: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn speak(&self, text: &str, language_tag: &str) -> Result<(), SpeechError> {
        self.spoken
            .lock()
            .unwrap()
            .push((text.to_string(), language_tag.to_string()));
        Ok(())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn speak_intent_uses_selected_language() {
    let synth = Arc::new(RecordingSynthesizer::default());
    let mut harness = setup_practice_harness_with_speech(
        key("Spanish", ExerciseType::VocabularyMatch, Level::A1),
        SpeechService::new(synth.clone()),
    );
    harness.rebuild();

    dispatch(&mut harness, PracticeIntent::Speak("la familia".into())).await;

    let spoken = synth.spoken.lock().unwrap().clone();
    assert_eq!(spoken, vec![("la familia".to_string(), "es-ES".to_string())]);
}
