use std::sync::Arc;

use practice_core::catalog::LessonCatalog;
use practice_core::model::LessonId;
use practice_core::time::fixed_clock;
use services::{
    PracticeService, RecognitionError, ScriptedRecognizer, SessionAdvance, SessionError,
    SpeechRecognizer,
};

fn service() -> PracticeService {
    PracticeService::new(fixed_clock(), Arc::new(LessonCatalog::builtin()))
}

#[test]
fn full_lesson_walkthrough() {
    let service = service();
    let mut session = service.start_session(LessonId::new(2)).unwrap();
    let total = session.lesson().exercises().len();
    assert_eq!(total, 2);

    let mut advances = Vec::new();
    while !session.is_complete() {
        let exercise = session.current_exercise().expect("exercise while incomplete");
        let expected = exercise.expected().to_string();

        let attempt = service.evaluate_attempt(&session, &expected).unwrap();
        assert!(attempt.is_correct, "echoing the hint should pass");

        advances.push(session.advance().unwrap());
    }

    // Exactly len(exercises) advances end in completion, and one more is a
    // typed error rather than a wrap-around.
    assert_eq!(advances.len(), total);
    assert_eq!(advances.last(), Some(&SessionAdvance::Complete));
    assert_eq!(session.advance(), Err(SessionError::Completed));
}

#[test]
fn unknown_lesson_is_a_recoverable_error() {
    let err = service().start_session(LessonId::new(404)).unwrap_err();
    assert_eq!(err, SessionError::LessonNotFound(LessonId::new(404)));
}

#[tokio::test]
async fn scripted_capture_drives_evaluation() {
    let service = service();
    let session = service.start_session(LessonId::new(1)).unwrap();

    let recognizer = ScriptedRecognizer::new();
    recognizer.push_transcript("I'm fine thank you");
    recognizer.push_transcript("good night");

    let transcript = recognizer.capture_utterance().await.unwrap();
    let attempt = service.evaluate_attempt(&session, &transcript).unwrap();
    assert!(attempt.is_correct);
    assert_eq!(attempt.transcript, "i'm fine thank you");

    let transcript = recognizer.capture_utterance().await.unwrap();
    let attempt = service.evaluate_attempt(&session, &transcript).unwrap();
    assert!(!attempt.is_correct);
}

#[tokio::test]
async fn recognition_failure_surfaces_its_kind() {
    let recognizer = ScriptedRecognizer::new();
    recognizer.push_error(RecognitionError::NotAllowed);

    let err = recognizer.capture_utterance().await.unwrap_err();
    assert_eq!(err, RecognitionError::NotAllowed);
    assert_eq!(err.to_string(), "microphone access was denied");
}
