use thiserror::Error;

use crate::model::exercise::Exercise;
use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("lesson icon cannot be empty")]
    EmptyIcon,

    #[error("lesson must contain at least one exercise")]
    NoExercises,
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A named, ordered group of exercises on one topic.
///
/// Lessons are immutable after construction and owned by the catalog for
/// the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: String,
    icon: String,
    exercises: Vec<Exercise>,
}

impl Lesson {
    /// Creates a new Lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTitle` or `LessonError::EmptyIcon` if the
    /// text is empty or whitespace-only, and `LessonError::NoExercises` for
    /// an empty exercise list.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        exercises: Vec<Exercise>,
    ) -> Result<Self, LessonError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        let icon = icon.into();
        if icon.trim().is_empty() {
            return Err(LessonError::EmptyIcon);
        }
        if exercises.is_empty() {
            return Err(LessonError::NoExercises);
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description: description.into().trim().to_owned(),
            icon: icon.trim().to_owned(),
            exercises,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Symbolic glyph name for the lesson card, e.g. `"handshake"`.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn exercise(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn one_exercise() -> Vec<Exercise> {
        vec![Exercise::phrase("Hello!", "Hello!").unwrap()]
    }

    #[test]
    fn lesson_new_rejects_empty_title() {
        let err = Lesson::new(LessonId::new(1), "  ", "desc", "user", one_exercise()).unwrap_err();
        assert_eq!(err, LessonError::EmptyTitle);
    }

    #[test]
    fn lesson_new_rejects_empty_icon() {
        let err = Lesson::new(LessonId::new(1), "Greetings", "desc", " ", one_exercise())
            .unwrap_err();
        assert_eq!(err, LessonError::EmptyIcon);
    }

    #[test]
    fn lesson_new_rejects_missing_exercises() {
        let err = Lesson::new(LessonId::new(1), "Greetings", "desc", "user", vec![]).unwrap_err();
        assert_eq!(err, LessonError::NoExercises);
    }

    #[test]
    fn lesson_new_happy_path() {
        let lesson = Lesson::new(
            LessonId::new(3),
            "  Restaurant ",
            " Order food in a restaurant ",
            "utensils",
            one_exercise(),
        )
        .unwrap();

        assert_eq!(lesson.id(), LessonId::new(3));
        assert_eq!(lesson.title(), "Restaurant");
        assert_eq!(lesson.description(), "Order food in a restaurant");
        assert_eq!(lesson.icon(), "utensils");
        assert_eq!(lesson.exercises().len(), 1);
        assert!(lesson.exercise(0).is_some());
        assert!(lesson.exercise(1).is_none());
    }
}
