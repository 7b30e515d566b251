//! Speech capability contracts and reference backends.
//!
//! The traits here are the seams to the host's text-to-speech and
//! speech-to-text capabilities. Concrete engines are added via feature
//! flags or external crates; the backends in this module are the ones the
//! repository itself ships: a platform synthesizer behind `native-tts`, a
//! logging null synthesizer, a scripted recognizer for tests and demos,
//! and an explicit "unsupported" recognizer for hosts without an engine.

mod recognition;
mod synthesis;

pub use crate::error::{RecognitionError, SynthesisError};
pub use recognition::{
    RecognizerConfig, ScriptedRecognizer, SpeechRecognizer, UnsupportedRecognizer,
};
#[cfg(feature = "native-tts")]
pub use synthesis::NativeSynthesizer;
pub use synthesis::{NullSynthesizer, PROMPT_SPEECH_RATE, SpeechSynthesizer};
