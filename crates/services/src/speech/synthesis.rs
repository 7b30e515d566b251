use tracing::debug;

use crate::error::SynthesisError;

/// Playback rate for exercise prompts; slightly slower than normal speech.
pub const PROMPT_SPEECH_RATE: f32 = 0.9;

/// A text-to-speech capability.
///
/// `speak` is fire-and-forget: it returns once the utterance is queued and
/// never waits for playback. Callers impose no ordering between synthesis
/// and recognition; an utterance plays to completion once started.
pub trait SpeechSynthesizer: Send + Sync {
    /// Queues `text` for playback at `rate`, where `1.0` is normal speed.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError` when the utterance cannot be queued.
    fn speak(&self, text: &str, rate: f32) -> Result<(), SynthesisError>;
}

/// Synthesizer that logs utterances and discards them.
///
/// Default backend when no platform engine is available or wanted; also
/// the test double.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSynthesizer;

impl SpeechSynthesizer for NullSynthesizer {
    fn speak(&self, text: &str, rate: f32) -> Result<(), SynthesisError> {
        debug!(rate, text, "discarding utterance (no synthesis backend)");
        Ok(())
    }
}

/// Platform speech engine via the `tts` crate.
#[cfg(feature = "native-tts")]
pub struct NativeSynthesizer {
    engine: std::sync::Mutex<tts::Tts>,
}

#[cfg(feature = "native-tts")]
impl NativeSynthesizer {
    /// Binds the platform's default speech engine.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::Unavailable` when the host has no engine.
    pub fn new() -> Result<Self, SynthesisError> {
        let engine =
            tts::Tts::default().map_err(|err| SynthesisError::Unavailable(err.to_string()))?;
        Ok(Self {
            engine: std::sync::Mutex::new(engine),
        })
    }
}

#[cfg(feature = "native-tts")]
impl SpeechSynthesizer for NativeSynthesizer {
    fn speak(&self, text: &str, rate: f32) -> Result<(), SynthesisError> {
        let mut engine = match self.engine.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // The engine's rate scale is platform specific; scale its normal
        // rate by the requested multiplier and stay inside its bounds.
        let target = (engine.normal_rate() * rate).clamp(engine.min_rate(), engine.max_rate());
        engine
            .set_rate(target)
            .map_err(|err| SynthesisError::Backend(err.to_string()))?;
        engine
            .speak(text, false)
            .map_err(|err| SynthesisError::Backend(err.to_string()))?;

        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
