//! The built-in lesson catalog.
//!
//! Lesson data is compiled into the program; there is no storage boundary.
//! The catalog is read-only for the process lifetime and exposes pure
//! lookups. Absence is an `Option`, not an error; callers decide how a
//! missing lesson is reported.

use crate::error::Error;
use crate::model::{Exercise, Lesson, LessonId};

/// Immutable, ordered collection of lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    #[must_use]
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    /// The catalog with the three built-in English lessons.
    ///
    /// # Panics
    ///
    /// Panics only if the compiled-in lesson data is invalid, which is a
    /// programmer error caught by tests.
    #[must_use]
    pub fn builtin() -> Self {
        let lessons = builtin_lessons().expect("built-in lesson data is valid");
        Self::new(lessons)
    }

    /// All lessons, in authored order.
    #[must_use]
    pub fn all(&self) -> &[Lesson] {
        &self.lessons
    }

    /// The lesson with the given id, if any.
    #[must_use]
    pub fn get(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

fn builtin_lessons() -> Result<Vec<Lesson>, Error> {
    Ok(vec![
        Lesson::new(
            LessonId::new(1),
            "Greetings",
            "Practice common English greetings",
            "handshake",
            vec![
                Exercise::phrase("Hello, how are you?", "I'm fine, thank you.")?,
                Exercise::phrase("Good morning!", "Good morning!")?,
                Exercise::phrase("What's your name?", "My name is [your name]")?,
            ],
        )?,
        Lesson::new(
            LessonId::new(2),
            "Introductions",
            "Introduce yourself in English",
            "user",
            vec![
                Exercise::phrase("Where are you from?", "I'm from [your country]")?,
                Exercise::phrase("What do you do?", "I'm a [your job]")?,
            ],
        )?,
        Lesson::new(
            LessonId::new(3),
            "Restaurant",
            "Order food in a restaurant",
            "utensils",
            vec![
                Exercise::phrase("I would like to order...", "I would like [food item]")?,
                Exercise::phrase("Could I have the menu please?", "Could I have the menu please?")?,
            ],
        )?,
    ])
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
