use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use practice_core::catalog::LessonCatalog;
use practice_core::time::fixed_clock;
use services::{NullSynthesizer, PracticeService, SpeechRecognizer, SpeechSynthesizer};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, PracticeView};

struct TestApp {
    practice: Arc<PracticeService>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    recognizer: Arc<dyn SpeechRecognizer>,
}

impl UiApp for TestApp {
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

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Practice(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Practice(lesson_id) => rsx! { PracticeView { lesson_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, recognizer: Arc<dyn SpeechRecognizer>) -> ViewHarness {
    let app = Arc::new(TestApp {
        practice: Arc::new(PracticeService::new(
            fixed_clock(),
            Arc::new(LessonCatalog::builtin()),
        )),
        synthesizer: Arc::new(NullSynthesizer),
        recognizer,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
