use std::sync::Arc;

use services::{ScriptedRecognizer, UnsupportedRecognizer};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test]
async fn home_lists_every_lesson_card() {
    let mut harness = setup_view_harness(ViewKind::Home, Arc::new(ScriptedRecognizer::new()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Greetings"));
    assert!(html.contains("Introductions"));
    assert!(html.contains("Restaurant"));
    assert!(html.contains("Practice common English greetings"));
    // A supported recognizer means no capability notice.
    assert!(!html.contains("Speech recognition is not available"));
}

#[tokio::test]
async fn home_surfaces_the_capability_notice_when_unsupported() {
    let mut harness = setup_view_harness(ViewKind::Home, Arc::new(UnsupportedRecognizer));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Speech recognition is not available"));
}

#[tokio::test]
async fn practice_shows_the_first_exercise_and_hint() {
    let mut harness =
        setup_view_harness(ViewKind::Practice(1), Arc::new(ScriptedRecognizer::new()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Hello, how are you?"));
    assert!(html.contains("Try saying"));
    assert!(html.contains("Exercise 1 of 3"));
    assert!(html.contains("Listen"));
    assert!(html.contains("Speak"));
    assert!(html.contains("Next"));
}

#[tokio::test]
async fn practice_with_unknown_lesson_shows_a_way_back() {
    let mut harness =
        setup_view_harness(ViewKind::Practice(99), Arc::new(ScriptedRecognizer::new()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No such lesson"));
    assert!(html.contains("Back to lessons"));
    assert!(!html.contains("Try saying"));
}
