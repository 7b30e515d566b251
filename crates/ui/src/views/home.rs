use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

/// Map a lesson's symbolic icon name to a glyph the card can show.
fn icon_glyph(name: &str) -> &'static str {
    match name {
        "handshake" => "🤝",
        "user" => "👤",
        "utensils" => "🍽️",
        _ => "🗣️",
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let practice = ctx.practice();
    let recognition_supported = ctx.recognition_supported();

    let cards = practice.lessons().iter().map(|lesson| {
        let id = lesson.id().value();
        let glyph = icon_glyph(lesson.icon());
        let title = lesson.title().to_string();
        let description = lesson.description().to_string();
        rsx! {
            button {
                key: "{id}",
                class: "lesson-card",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Practice { lesson_id: id });
                },
                span { class: "lesson-icon", "{glyph}" }
                h3 { class: "lesson-title", "{title}" }
                p { class: "lesson-description", "{description}" }
            }
        }
    });

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Lessons" }
                p { class: "view-subtitle", "Pick a lesson and practice speaking out loud." }
            }
            if !recognition_supported {
                p { class: "notice notice-warning",
                    "Speech recognition is not available on this system. "
                    "You can still listen to prompts, but spoken answers stay disabled."
                }
            }
            div { class: "lesson-grid", {cards} }
        }
    }
}
