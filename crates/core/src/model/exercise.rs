use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("exercise prompt cannot be empty")]
    EmptyPrompt,

    #[error("expected response cannot be empty")]
    EmptyResponse,
}

//
// ─── EXERCISE ──────────────────────────────────────────────────────────────────
//

/// The shape of an exercise.
///
/// Only spoken phrases exist today; the enum leaves room for listening or
/// fill-in exercises later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseKind {
    Phrase,
}

/// One prompt / expected-response pair.
///
/// The prompt is spoken to the learner; the expected response is what the
/// learner should say back. Bracketed segments such as `[your name]` are
/// never resolved and match literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    kind: ExerciseKind,
    prompt: String,
    expected: String,
}

impl Exercise {
    /// Creates a phrase exercise.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt or expected response is empty or
    /// whitespace-only.
    pub fn phrase(
        prompt: impl Into<String>,
        expected: impl Into<String>,
    ) -> Result<Self, ExerciseError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ExerciseError::EmptyPrompt);
        }
        let expected = expected.into();
        if expected.trim().is_empty() {
            return Err(ExerciseError::EmptyResponse);
        }

        Ok(Self {
            kind: ExerciseKind::Phrase,
            prompt: prompt.trim().to_owned(),
            expected: expected.trim().to_owned(),
        })
    }

    // Accessors
    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_rejects_empty_prompt() {
        let err = Exercise::phrase("   ", "ok").unwrap_err();
        assert_eq!(err, ExerciseError::EmptyPrompt);
    }

    #[test]
    fn phrase_rejects_empty_response() {
        let err = Exercise::phrase("ok", " ").unwrap_err();
        assert_eq!(err, ExerciseError::EmptyResponse);
    }

    #[test]
    fn phrase_trims_both_texts() {
        let exercise = Exercise::phrase("  Good morning!  ", " Good morning! ").unwrap();
        assert_eq!(exercise.prompt(), "Good morning!");
        assert_eq!(exercise.expected(), "Good morning!");
        assert_eq!(exercise.kind(), ExerciseKind::Phrase);
    }

    #[test]
    fn placeholder_segments_are_kept_verbatim() {
        let exercise = Exercise::phrase("What's your name?", "My name is [your name]").unwrap();
        assert_eq!(exercise.expected(), "My name is [your name]");
    }
}
