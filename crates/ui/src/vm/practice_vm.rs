use practice_core::model::Lesson;
use services::{AttemptResult, PracticeSession, RecognitionError, SessionAdvance, SessionError};

/// Capture sub-state of the speak control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureState {
    Off,
    Listening,
}

/// Feedback shown under the exercise.
#[derive(Clone, Debug, PartialEq)]
pub enum Feedback {
    Correct { similarity: f32 },
    TryAgain { similarity: f32 },
    RecognitionFailed(String),
    LessonComplete,
}

impl Feedback {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Feedback::Correct { .. } => "Correct! 🎉".to_string(),
            Feedback::TryAgain { .. } => "Try again!".to_string(),
            Feedback::RecognitionFailed(reason) => format!("Error: {reason}"),
            Feedback::LessonComplete => "Lesson complete! Great job!".to_string(),
        }
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        matches!(self, Feedback::Correct { .. } | Feedback::LessonComplete)
    }
}

/// What the view does after an advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeOutcome {
    Continue,
    Completed,
}

/// View-model for the practice surface.
///
/// Holds the session plus the transient feedback and capture state the
/// view renders from. The view drives it through the methods below; no
/// other call site mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct PracticeVm {
    session: PracticeSession,
    capture: CaptureState,
    feedback: Option<Feedback>,
}

impl PracticeVm {
    #[must_use]
    pub fn new(session: PracticeSession) -> Self {
        Self {
            session,
            capture: CaptureState::Off,
            feedback: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        self.session.lesson()
    }

    #[must_use]
    pub fn capture(&self) -> CaptureState {
        self.capture
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn prompt_text(&self) -> Option<&str> {
        self.session.current_exercise().map(|e| e.prompt())
    }

    #[must_use]
    pub fn expected_text(&self) -> Option<&str> {
        self.session.current_exercise().map(|e| e.expected())
    }

    /// Zero-based exercise index and lesson length, for the header.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (
            self.session.exercise_index(),
            self.session.lesson().exercises().len(),
        )
    }

    /// Start listening; prior feedback is hidden.
    pub fn begin_capture(&mut self) {
        self.capture = CaptureState::Listening;
        self.feedback = None;
    }

    /// Stop listening without a result; feedback stays hidden.
    pub fn cancel_capture(&mut self) {
        self.capture = CaptureState::Off;
    }

    /// Apply a scored attempt: show feedback, stop listening.
    pub fn apply_attempt(&mut self, attempt: &AttemptResult) {
        self.capture = CaptureState::Off;
        self.feedback = Some(if attempt.is_correct {
            Feedback::Correct {
                similarity: attempt.similarity,
            }
        } else {
            Feedback::TryAgain {
                similarity: attempt.similarity,
            }
        });
    }

    /// Apply a failed capture: show the error kind, stop listening.
    pub fn apply_recognition_error(&mut self, error: &RecognitionError) {
        self.capture = CaptureState::Off;
        self.feedback = Some(Feedback::RecognitionFailed(error.to_string()));
    }

    /// Move to the next exercise or into the completed state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when the session is already done.
    pub fn advance(&mut self) -> Result<PracticeOutcome, SessionError> {
        match self.session.advance()? {
            SessionAdvance::Next => {
                self.feedback = None;
                Ok(PracticeOutcome::Continue)
            }
            SessionAdvance::Complete => {
                self.feedback = Some(Feedback::LessonComplete);
                Ok(PracticeOutcome::Completed)
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use practice_core::catalog::LessonCatalog;
    use practice_core::model::LessonId;
    use practice_core::time::fixed_clock;
    use services::PracticeService;

    fn vm_for(lesson_id: u64) -> (PracticeService, PracticeVm) {
        let service = PracticeService::new(fixed_clock(), Arc::new(LessonCatalog::builtin()));
        let session = service.start_session(LessonId::new(lesson_id)).unwrap();
        (service, PracticeVm::new(session))
    }

    #[test]
    fn toggling_capture_on_then_off_leaves_feedback_hidden() {
        let (_, mut vm) = vm_for(1);

        vm.begin_capture();
        assert_eq!(vm.capture(), CaptureState::Listening);
        assert!(vm.feedback().is_none());

        vm.cancel_capture();
        assert_eq!(vm.capture(), CaptureState::Off);
        assert!(vm.feedback().is_none());
    }

    #[test]
    fn correct_attempt_sets_positive_feedback_and_stops_listening() {
        let (service, mut vm) = vm_for(1);
        vm.begin_capture();

        let attempt = service
            .evaluate_attempt(vm.session(), "i'm fine thank you")
            .unwrap();
        vm.apply_attempt(&attempt);

        assert_eq!(vm.capture(), CaptureState::Off);
        let feedback = vm.feedback().unwrap();
        assert!(feedback.is_positive());
        assert_eq!(feedback.message(), "Correct! 🎉");
    }

    #[test]
    fn incorrect_attempt_asks_to_try_again() {
        let (service, mut vm) = vm_for(1);
        vm.begin_capture();

        let attempt = service
            .evaluate_attempt(vm.session(), "completely unrelated words")
            .unwrap();
        vm.apply_attempt(&attempt);

        let feedback = vm.feedback().unwrap();
        assert!(!feedback.is_positive());
        assert_eq!(feedback.message(), "Try again!");
    }

    #[test]
    fn recognition_error_becomes_feedback_text() {
        let (_, mut vm) = vm_for(1);
        vm.begin_capture();

        vm.apply_recognition_error(&RecognitionError::NoSpeech);

        assert_eq!(vm.capture(), CaptureState::Off);
        assert_eq!(
            vm.feedback().unwrap().message(),
            "Error: no speech was detected"
        );
    }

    #[test]
    fn advancing_through_a_lesson_ends_in_completion_feedback() {
        let (_, mut vm) = vm_for(2);

        assert_eq!(vm.advance().unwrap(), PracticeOutcome::Continue);
        assert!(vm.feedback().is_none());

        assert_eq!(vm.advance().unwrap(), PracticeOutcome::Completed);
        assert_eq!(vm.feedback(), Some(&Feedback::LessonComplete));

        assert_eq!(vm.advance(), Err(SessionError::Completed));
    }
}
