use std::sync::Arc;

use services::{PracticeService, SpeechRecognizer, SpeechSynthesizer};

/// Capabilities the composition root provides to the UI.
pub trait UiApp: Send + Sync {
    fn practice(&self) -> Arc<PracticeService>;
    fn synthesizer(&self) -> Arc<dyn SpeechSynthesizer>;
    fn recognizer(&self) -> Arc<dyn SpeechRecognizer>;
}

#[derive(Clone)]
pub struct AppContext {
    practice: Arc<PracticeService>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    recognizer: Arc<dyn SpeechRecognizer>,
    recognition_supported: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let recognizer = app.recognizer();
        Self {
            practice: app.practice(),
            synthesizer: app.synthesizer(),
            recognition_supported: recognizer.is_supported(),
            recognizer,
        }
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn synthesizer(&self) -> Arc<dyn SpeechSynthesizer> {
        Arc::clone(&self.synthesizer)
    }

    #[must_use]
    pub fn recognizer(&self) -> Arc<dyn SpeechRecognizer> {
        Arc::clone(&self.recognizer)
    }

    /// Capability probe, taken once at startup; when false the views show
    /// a notice and keep recognition controls disabled.
    #[must_use]
    pub fn recognition_supported(&self) -> bool {
        self.recognition_supported
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
