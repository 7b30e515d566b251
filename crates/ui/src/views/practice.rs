use dioxus::prelude::*;
use dioxus_router::use_navigator;

use practice_core::model::LessonId;
use services::{ADVANCE_AFTER_CORRECT, PROMPT_SPEECH_RATE, RETURN_AFTER_COMPLETE};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{CaptureState, PracticeOutcome, PracticeVm};

#[component]
pub fn PracticeView(lesson_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let practice = ctx.practice();
    let recognition_supported = ctx.recognition_supported();

    // The session is built exactly once per mount; an unresolvable id is
    // kept as the error state instead of tearing the view down.
    let practice_for_init = practice.clone();
    let vm = use_signal(move || {
        practice_for_init
            .start_session(LessonId::new(lesson_id))
            .map(PracticeVm::new)
    });

    // At most one capture task and one scheduled transition exist at a
    // time; both are held as cancellable handles.
    let capture_task = use_signal(|| None::<Task>);
    let pending_transition = use_signal(|| None::<Task>);

    let do_advance = use_callback(move |_: ()| {
        let mut vm = vm;
        let mut pending_transition = pending_transition;

        // A user action supersedes whatever transition was scheduled.
        if let Some(task) = pending_transition.write().take() {
            task.cancel();
        }

        let outcome = {
            let mut guard = vm.write();
            guard.as_mut().ok().map(PracticeVm::advance)
        };

        if let Some(Ok(PracticeOutcome::Completed)) = outcome {
            let task = spawn(async move {
                tokio::time::sleep(RETURN_AFTER_COMPLETE).await;
                pending_transition.set(None);
                let _ = navigator.push(Route::Home {});
            });
            pending_transition.set(Some(task));
        }
    });

    let synthesizer = ctx.synthesizer();
    let speak_prompt = use_callback(move |_: ()| {
        let prompt = vm
            .read()
            .as_ref()
            .ok()
            .and_then(|state| state.prompt_text().map(str::to_string));
        if let Some(prompt) = prompt {
            // Fire-and-forget: playback is not awaited and a playback
            // problem never blocks the session.
            let _ = synthesizer.speak(&prompt, PROMPT_SPEECH_RATE);
        }
    });

    let recognizer = ctx.recognizer();
    let practice_for_eval = practice.clone();
    let toggle_capture = use_callback(move |_: ()| {
        let mut vm = vm;
        let mut capture_task = capture_task;
        let mut pending_transition = pending_transition;

        if let Some(task) = pending_transition.write().take() {
            task.cancel();
        }

        let listening = vm
            .read()
            .as_ref()
            .is_ok_and(|state| state.capture() == CaptureState::Listening);

        if listening {
            // Stopping capture drops the pending recognition result.
            if let Some(task) = capture_task.write().take() {
                task.cancel();
            }
            if let Ok(state) = vm.write().as_mut() {
                state.cancel_capture();
            }
            return;
        }

        if let Ok(state) = vm.write().as_mut() {
            state.begin_capture();
        }

        let recognizer = recognizer.clone();
        let practice = practice_for_eval.clone();
        let task = spawn(async move {
            match recognizer.capture_utterance().await {
                Ok(transcript) => {
                    let attempt = {
                        let guard = vm.read();
                        guard.as_ref().ok().and_then(|state| {
                            practice.evaluate_attempt(state.session(), &transcript).ok()
                        })
                    };

                    let Some(attempt) = attempt else {
                        if let Ok(state) = vm.write().as_mut() {
                            state.cancel_capture();
                        }
                        capture_task.set(None);
                        return;
                    };

                    let is_correct = attempt.is_correct;
                    if let Ok(state) = vm.write().as_mut() {
                        state.apply_attempt(&attempt);
                    }

                    if is_correct {
                        // From here this task is the scheduled advance, not
                        // a capture; reclassify its handle so a later user
                        // action cancels the right thing.
                        let own = capture_task.write().take();
                        pending_transition.set(own);
                        tokio::time::sleep(ADVANCE_AFTER_CORRECT).await;
                        pending_transition.set(None);
                        do_advance.call(());
                        return;
                    }
                }
                Err(error) => {
                    if let Ok(state) = vm.write().as_mut() {
                        state.apply_recognition_error(&error);
                    }
                }
            }
            capture_task.set(None);
        });
        capture_task.set(Some(task));
    });

    let view = vm.read().clone();
    match view {
        Err(_) => rsx! {
            div { class: "page practice-page",
                p { class: "notice notice-error", {ViewError::LessonNotFound.message()} }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Back to lessons"
                }
            }
        },
        Ok(state) => {
            let title = state.lesson().title().to_string();
            let (index, total) = state.position();
            let position_label = format!("Exercise {} of {}", index + 1, total);
            let listening = state.capture() == CaptureState::Listening;
            let exercise = state
                .prompt_text()
                .map(str::to_string)
                .zip(state.expected_text().map(str::to_string));
            let feedback = state.feedback().map(|feedback| {
                let class = if feedback.is_positive() {
                    "feedback correct"
                } else {
                    "feedback incorrect"
                };
                (class, feedback.message())
            });

            let speak_class = if listening {
                "btn btn-primary recording"
            } else {
                "btn btn-primary"
            };
            let speak_label = if listening { "Stop" } else { "Speak" };

            rsx! {
                div { class: "page practice-page",
                    header { class: "view-header",
                        h2 { class: "view-title", "{title}" }
                        if index < total {
                            p { class: "view-subtitle", "{position_label}" }
                        }
                    }
                    if let Some((prompt, expected)) = exercise {
                        div { class: "exercise",
                            p { class: "exercise-prompt", "{prompt}" }
                            p { class: "exercise-hint", "Try saying: \"{expected}\"" }
                        }
                        div { class: "practice-controls",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| speak_prompt.call(()),
                                "Listen"
                            }
                            button {
                                class: "{speak_class}",
                                r#type: "button",
                                disabled: !recognition_supported,
                                onclick: move |_| toggle_capture.call(()),
                                "{speak_label}"
                            }
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| do_advance.call(()),
                                "Next"
                            }
                        }
                        if !recognition_supported {
                            p { class: "view-hint",
                                "Speech recognition is not available; use Next to move on."
                            }
                        }
                    }
                    if let Some((feedback_class, feedback_message)) = feedback {
                        p { class: "{feedback_class}", "{feedback_message}" }
                    }
                }
            }
        }
    }
}
