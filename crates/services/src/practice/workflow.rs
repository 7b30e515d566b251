use std::sync::Arc;
use std::time::Duration;

use practice_core::Clock;
use practice_core::catalog::LessonCatalog;
use practice_core::matching;
use practice_core::model::{Lesson, LessonId};

use super::session::PracticeSession;
use crate::error::SessionError;

/// Delay before auto-advancing after a correct response.
pub const ADVANCE_AFTER_CORRECT: Duration = Duration::from_millis(1500);

/// Delay before returning to the lesson list after completing a lesson.
pub const RETURN_AFTER_COMPLETE: Duration = Duration::from_secs(2);

/// Result of evaluating one recognized utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptResult {
    /// The transcript as evaluated (lower-cased).
    pub transcript: String,
    pub similarity: f32,
    pub is_correct: bool,
}

/// Orchestrates lesson selection and attempt evaluation over the catalog.
#[derive(Clone)]
pub struct PracticeService {
    clock: Clock,
    catalog: Arc<LessonCatalog>,
}

impl PracticeService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<LessonCatalog>) -> Self {
        Self { clock, catalog }
    }

    /// All lessons, in authored order, for the selection list.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        self.catalog.all()
    }

    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.catalog.get(id)
    }

    /// Starts a practice session for the given lesson.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::LessonNotFound` when the id does not resolve;
    /// the caller keeps its current view rather than crashing.
    pub fn start_session(&self, lesson_id: LessonId) -> Result<PracticeSession, SessionError> {
        let lesson = self
            .catalog
            .get(lesson_id)
            .ok_or(SessionError::LessonNotFound(lesson_id))?;

        Ok(PracticeSession::start(lesson.clone(), self.clock.now()))
    }

    /// Scores a recognized utterance against the session's current exercise.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when the session has no current
    /// exercise left to score against.
    pub fn evaluate_attempt(
        &self,
        session: &PracticeSession,
        transcript: &str,
    ) -> Result<AttemptResult, SessionError> {
        let exercise = session.current_exercise().ok_or(SessionError::Completed)?;

        let transcript = transcript.to_lowercase();
        let report = matching::evaluate(&transcript, exercise.expected());

        Ok(AttemptResult {
            transcript,
            similarity: report.similarity,
            is_correct: report.is_correct,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use practice_core::time::fixed_clock;

    fn service() -> PracticeService {
        PracticeService::new(fixed_clock(), Arc::new(LessonCatalog::builtin()))
    }

    #[test]
    fn start_session_resolves_the_lesson() {
        let session = service().start_session(LessonId::new(2)).unwrap();
        assert_eq!(session.lesson().title(), "Introductions");
        assert_eq!(session.exercise_index(), 0);
    }

    #[test]
    fn start_session_with_unknown_id_fails() {
        let err = service().start_session(LessonId::new(42)).unwrap_err();
        assert_eq!(err, SessionError::LessonNotFound(LessonId::new(42)));
    }

    #[test]
    fn evaluate_attempt_lowercases_and_scores() {
        let service = service();
        let session = service.start_session(LessonId::new(1)).unwrap();

        let attempt = service
            .evaluate_attempt(&session, "I'M FINE THANK YOU")
            .unwrap();

        assert_eq!(attempt.transcript, "i'm fine thank you");
        assert!(attempt.is_correct);
    }

    #[test]
    fn evaluate_attempt_marks_unrelated_speech_incorrect() {
        let service = service();
        let session = service.start_session(LessonId::new(1)).unwrap();

        let attempt = service
            .evaluate_attempt(&session, "the weather is lovely today")
            .unwrap();

        assert!(!attempt.is_correct);
    }

    #[test]
    fn evaluate_attempt_on_completed_session_fails() {
        let service = service();
        let mut session = service.start_session(LessonId::new(2)).unwrap();
        session.advance().unwrap();
        session.advance().unwrap();

        let err = service.evaluate_attempt(&session, "anything").unwrap_err();
        assert_eq!(err, SessionError::Completed);
    }
}
