use chrono::{DateTime, Utc};

use practice_core::model::{Exercise, Lesson};

use super::progress::SessionProgress;
use crate::error::SessionError;

/// Outcome of advancing past the current exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAdvance {
    /// Another exercise is up next.
    Next,
    /// The last exercise was passed; the lesson is complete.
    Complete,
}

/// Mutable state for one run through a lesson.
///
/// Owned by a single controller and mutated only in response to its UI
/// events; starting a new lesson means constructing a new value. The
/// exercise index satisfies `0 <= index <= exercises.len()`, where
/// `index == len` marks the lesson complete.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSession {
    lesson: Lesson,
    exercise_index: usize,
    started_at: DateTime<Utc>,
}

impl PracticeSession {
    #[must_use]
    pub fn start(lesson: Lesson, started_at: DateTime<Utc>) -> Self {
        Self {
            lesson,
            exercise_index: 0,
            started_at,
        }
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The exercise currently being practiced, or `None` once complete.
    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.lesson.exercise(self.exercise_index)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.exercise_index >= self.lesson.exercises().len()
    }

    /// Moves past the current exercise.
    ///
    /// The index only ever moves forward; it never wraps or decrements.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when the lesson is already
    /// complete.
    pub fn advance(&mut self) -> Result<SessionAdvance, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        self.exercise_index += 1;
        if self.is_complete() {
            Ok(SessionAdvance::Complete)
        } else {
            Ok(SessionAdvance::Next)
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.lesson.exercises().len();
        SessionProgress {
            total,
            completed: self.exercise_index,
            remaining: total - self.exercise_index,
            is_complete: self.is_complete(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use practice_core::model::LessonId;
    use practice_core::time::fixed_now;

    fn two_exercise_lesson() -> Lesson {
        Lesson::new(
            LessonId::new(2),
            "Introductions",
            "Introduce yourself in English",
            "user",
            vec![
                Exercise::phrase("Where are you from?", "I'm from [your country]").unwrap(),
                Exercise::phrase("What do you do?", "I'm a [your job]").unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn session_starts_at_first_exercise() {
        let session = PracticeSession::start(two_exercise_lesson(), fixed_now());

        assert_eq!(session.exercise_index(), 0);
        assert!(!session.is_complete());
        assert_eq!(
            session.current_exercise().unwrap().prompt(),
            "Where are you from?"
        );
    }

    #[test]
    fn advancing_len_times_completes_and_never_wraps() {
        let mut session = PracticeSession::start(two_exercise_lesson(), fixed_now());

        assert_eq!(session.advance().unwrap(), SessionAdvance::Next);
        assert_eq!(session.advance().unwrap(), SessionAdvance::Complete);
        assert!(session.is_complete());
        assert_eq!(session.exercise_index(), 2);
        assert!(session.current_exercise().is_none());

        // One more advance is an error, not a wrap-around.
        assert_eq!(session.advance(), Err(SessionError::Completed));
        assert_eq!(session.exercise_index(), 2);
    }

    #[test]
    fn progress_counts_follow_the_index() {
        let mut session = PracticeSession::start(two_exercise_lesson(), fixed_now());

        let progress = session.progress();
        assert_eq!(progress.total, 2);
        assert_eq!(progress.completed, 0);
        assert_eq!(progress.remaining, 2);
        assert!(!progress.is_complete);

        session.advance().unwrap();
        session.advance().unwrap();

        let progress = session.progress();
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.remaining, 0);
        assert!(progress.is_complete);
    }
}
