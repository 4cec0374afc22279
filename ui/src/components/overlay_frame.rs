use dioxus::prelude::*;

use crate::{i18n, t};

/// Backdrop, animated panel and close control shared by every overlay.
///
/// `class` comes from `OverlayState::css_class` and selects the enter/exit
/// keyframes in `main.css`.
#[component]
pub fn OverlayFrame(class: String, title: String, on_close: EventHandler<()>, children: Element) -> Element {
    let _lang = i18n::use_language();

    rsx! {
        div { class: "{class}",
            div { class: "overlay__backdrop", onclick: move |_| on_close.call(()) }
            section {
                class: "overlay__panel",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{title}",
                div { class: "overlay__header",
                    h2 { class: "overlay__title", "{title}" }
                    button {
                        r#type: "button",
                        class: "overlay__close",
                        aria_label: t!("overlay-close"),
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "overlay__body", {children} }
            }
        }
    }
}
