#![forbid(unsafe_code)]

pub mod error;
pub mod practice;
pub mod speech;

pub use practice_core::Clock;

pub use error::{RecognitionError, SessionError, SynthesisError};

pub use practice::{
    ADVANCE_AFTER_CORRECT, AttemptResult, PracticeService, PracticeSession, RETURN_AFTER_COMPLETE,
    SessionAdvance, SessionProgress,
};

#[cfg(feature = "native-tts")]
pub use speech::NativeSynthesizer;
pub use speech::{
    NullSynthesizer, PROMPT_SPEECH_RATE, RecognizerConfig, ScriptedRecognizer, SpeechRecognizer,
    SpeechSynthesizer, UnsupportedRecognizer,
};
