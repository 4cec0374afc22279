use dioxus::prelude::*;

use crate::counter::LimitAlert;
use crate::{i18n, t};

/// Blocking notice shown when a limit rejects a count change.
#[component]
pub fn LimitAlertDialog(alert: LimitAlert, on_dismiss: EventHandler<()>) -> Element {
    let _lang = i18n::use_language();
    let body = match alert {
        LimitAlert::Max(value) => t!("alert-max-body", value = value),
        LimitAlert::Min(value) => t!("alert-min-body", value = value),
    };

    rsx! {
        div { class: "alert",
            div {
                class: "alert__card",
                role: "alertdialog",
                aria_modal: "true",
                h2 { class: "alert__title", {t!("alert-limit-title")} }
                p { class: "alert__body", "{body}" }
                button {
                    r#type: "button",
                    class: "button button--primary alert__dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    {t!("alert-dismiss")}
                }
            }
        }
    }
}
