use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use practice_core::Clock;
use practice_core::catalog::LessonCatalog;
use services::{
    NullSynthesizer, PracticeService, RecognizerConfig, ScriptedRecognizer, SpeechRecognizer,
    SpeechSynthesizer, UnsupportedRecognizer,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLang { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLang { raw } => write!(f, "invalid --lang value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--lang <bcp47_tag>] [--no-speech] [--demo]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --lang en-US");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --no-speech  mute prompt playback");
    eprintln!("  --demo       replay expected responses instead of capturing speech");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PRACTICE_LANG");
}

struct Args {
    language: String,
    no_speech: bool,
    demo: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut language = std::env::var("PRACTICE_LANG")
            .ok()
            .unwrap_or_else(|| "en-US".into());
        let mut no_speech = false;
        let mut demo = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lang" => {
                    let value = require_value(args, "--lang")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLang { raw: value });
                    }
                    language = value.trim().to_string();
                }
                "--no-speech" => no_speech = true,
                "--demo" => demo = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            language,
            no_speech,
            demo,
        })
    }
}

struct DesktopApp {
    practice: Arc<PracticeService>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    recognizer: Arc<dyn SpeechRecognizer>,
}

impl UiApp for DesktopApp {
    fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    fn synthesizer(&self) -> Arc<dyn SpeechSynthesizer> {
        Arc::clone(&self.synthesizer)
    }

    fn recognizer(&self) -> Arc<dyn SpeechRecognizer> {
        Arc::clone(&self.recognizer)
    }
}

fn select_synthesizer(no_speech: bool) -> Arc<dyn SpeechSynthesizer> {
    if no_speech {
        info!("prompt playback muted (--no-speech)");
        return Arc::new(NullSynthesizer);
    }

    #[cfg(feature = "native-tts")]
    {
        match services::NativeSynthesizer::new() {
            Ok(synth) => return Arc::new(synth),
            Err(err) => {
                tracing::warn!(%err, "native speech synthesis unavailable, muting prompts");
            }
        }
    }

    Arc::new(NullSynthesizer)
}

fn select_recognizer(
    catalog: &LessonCatalog,
    language: &str,
    demo: bool,
) -> Arc<dyn SpeechRecognizer> {
    let config = RecognizerConfig::default().with_language(language);

    if demo {
        // Demo mode scripts a perfect learner: every capture yields the
        // expected response of the exercise the learner is on, in catalog
        // order.
        let recognizer = ScriptedRecognizer::with_config(config);
        for lesson in catalog.all() {
            for exercise in lesson.exercises() {
                recognizer.push_transcript(exercise.expected());
            }
        }
        info!("demo mode: replaying expected responses instead of capturing speech");
        return Arc::new(recognizer);
    }

    // No capture engine ships with the binary yet; the UI surfaces the
    // capability notice and keeps recognition disabled for the session.
    info!(
        language = config.language(),
        "no speech recognition engine wired; capture disabled"
    );
    Arc::new(UnsupportedRecognizer)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(parsed) => parsed,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };

    let catalog = Arc::new(LessonCatalog::builtin());
    let practice = Arc::new(PracticeService::new(
        Clock::default_clock(),
        Arc::clone(&catalog),
    ));
    let synthesizer = select_synthesizer(parsed.no_speech);
    let recognizer = select_recognizer(&catalog, &parsed.language, parsed.demo);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        practice,
        synthesizer,
        recognizer,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Speak & Learn")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}
