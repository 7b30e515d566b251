use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::error::RecognitionError;

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Configuration for a speech recognition backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerConfig {
    language: String,
    interim_results: bool,
    max_alternatives: u8,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            interim_results: false,
            max_alternatives: 1,
        }
    }
}

impl RecognizerConfig {
    /// Set the BCP 47 language tag.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether interim (non-final) results may be delivered. Always false
    /// for the backends shipped here: capture is single-utterance, final
    /// results only.
    #[must_use]
    pub fn interim_results(&self) -> bool {
        self.interim_results
    }

    #[must_use]
    pub fn max_alternatives(&self) -> u8 {
        self.max_alternatives
    }
}

//
// ─── RECOGNIZER ────────────────────────────────────────────────────────────────
//

/// A speech-to-text capability.
///
/// One call captures one utterance: the future resolves with the single
/// best final transcript, or with one error. Dropping the future cancels
/// the pending capture; that is the contract's only cancellation path.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Whether the host can recognize speech at all.
    ///
    /// Probed once at startup; when false the UI surfaces a notice and
    /// keeps recognition controls disabled for the session.
    fn is_supported(&self) -> bool {
        true
    }

    /// Captures a single utterance and returns the best transcript.
    async fn capture_utterance(&self) -> Result<String, RecognitionError>;
}

/// Backend for hosts without a speech recognition engine.
///
/// Every capture fails cleanly with [`RecognitionError::Unsupported`];
/// nothing here can crash the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRecognizer;

#[async_trait]
impl SpeechRecognizer for UnsupportedRecognizer {
    fn is_supported(&self) -> bool {
        false
    }

    async fn capture_utterance(&self) -> Result<String, RecognitionError> {
        debug!("capture requested without a recognition engine");
        Err(RecognitionError::Unsupported)
    }
}

/// In-memory recognizer that replays scripted results in order.
///
/// Used by tests and by the app's demo mode. Once the script is drained,
/// captures report `NoSpeech`.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    config: RecognizerConfig,
    script: Mutex<VecDeque<Result<String, RecognitionError>>>,
}

impl ScriptedRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RecognizerConfig) -> Self {
        Self {
            config,
            script: Mutex::new(VecDeque::new()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn push_transcript(&self, transcript: impl Into<String>) {
        self.lock_script().push_back(Ok(transcript.into()));
    }

    pub fn push_error(&self, error: RecognitionError) {
        self.lock_script().push_back(Err(error));
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, RecognitionError>>> {
        match self.script.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn capture_utterance(&self) -> Result<String, RecognitionError> {
        let next = self.lock_script().pop_front();
        match next {
            Some(result) => result,
            None => Err(RecognitionError::NoSpeech),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
