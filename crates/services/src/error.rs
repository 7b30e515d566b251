//! Shared error types for the services crate.

use thiserror::Error;

use practice_core::model::LessonId;

/// Errors emitted by the practice session workflow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("lesson {0} not found")]
    LessonNotFound(LessonId),

    #[error("lesson already completed")]
    Completed,
}

/// Errors emitted by speech recognition backends.
///
/// The variants mirror the error kinds recognition engines report per
/// attempt; none of them is fatal to the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecognitionError {
    #[error("speech recognition is not supported on this system")]
    Unsupported,

    #[error("no speech was detected")]
    NoSpeech,

    #[error("recognition service is unreachable")]
    Network,

    #[error("microphone access was denied")]
    NotAllowed,

    #[error("recognition was aborted")]
    Aborted,

    #[error("recognition failed: {0}")]
    Other(String),
}

/// Errors emitted by speech synthesis backends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SynthesisError {
    #[error("speech synthesis is unavailable: {0}")]
    Unavailable(String),

    #[error("speech synthesis failed: {0}")]
    Backend(String),
}
