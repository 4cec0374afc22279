use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::core::settings::CounterSettings;
use crate::core::theme::ThemeColor;
use crate::core::{format, input, platform};
use crate::{i18n, t};

use super::screen::SettingsEdit;

/// Destination of the link button in the info panel.
pub const INFO_URL: &str = "https://dioxuslabs.com";

#[component]
pub fn InfoPanel() -> Element {
    let _lang = i18n::use_language();
    let version = env!("CARGO_PKG_VERSION");
    let platform_label = platform::Platform::current().as_str();

    rsx! {
        div { class: "info-panel",
            p { class: "info-panel__body", {t!("info-body")} }
            p { class: "info-panel__meta",
                {t!("info-version", version = version, platform = platform_label)}
            }
            button {
                r#type: "button",
                class: "button button--ghost info-panel__link",
                onclick: move |_| {
                    if let Err(err) = platform::open_external_url(INFO_URL) {
                        error!("[info] failed opening {INFO_URL}: {err}");
                    }
                },
                {t!("info-link")}
            }
        }
    }
}

#[component]
pub fn SettingsPanel(
    settings: CounterSettings,
    count: i64,
    on_edit: EventHandler<SettingsEdit>,
    on_set_count: EventHandler<i64>,
) -> Element {
    let mut count_draft = use_signal(|| count.to_string());
    let mut increment_draft = use_signal(|| settings.increment_value.to_string());
    let mut decrement_draft = use_signal(|| settings.decrement_value.to_string());
    let mut max_draft = use_signal(|| format::format_limit(settings.max_value));
    let mut min_draft = use_signal(|| format::format_limit(settings.min_value));

    let limits_enabled = settings.limits_enabled;
    let active_color = settings.theme_color;
    let limits_grid_class = if limits_enabled {
        "settings-panel__grid"
    } else {
        "settings-panel__grid settings-panel__grid--muted"
    };

    let languages = use_hook(i18n::available_languages);
    let current_lang = i18n::use_language();
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_language = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                if let Some(mut code) = lang_code {
                    code.set(tag);
                }
            }
            Err(err) => error!("[i18n] failed switching to {tag}: {err}"),
        }
    };

    let submit_count = move || {
        if let Some(value) = input::parse_count_submission(&count_draft()) {
            on_set_count.call(value);
        }
    };

    rsx! {
        div { class: "settings-panel",
            div { class: "settings-panel__field",
                label { r#for: "set-count", {t!("settings-set-count")} }
                div { class: "settings-panel__row",
                    input {
                        id: "set-count",
                        class: "settings-panel__input",
                        inputmode: "numeric",
                        value: "{count_draft}",
                        oninput: move |evt: FormEvent| {
                            count_draft.set(input::sanitize_count_input(&evt.value()));
                        },
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key().to_string() == "Enter" {
                                submit_count();
                            }
                        },
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| submit_count(),
                        {t!("settings-set-count-apply")}
                    }
                }
            }

            div { class: "settings-panel__grid",
                div { class: "settings-panel__field",
                    label { r#for: "increment-step", {t!("settings-increment")} }
                    input {
                        id: "increment-step",
                        class: "settings-panel__input",
                        inputmode: "numeric",
                        value: "{increment_draft}",
                        oninput: move |evt: FormEvent| {
                            let cleaned = input::sanitize_count_input(&evt.value());
                            if let Some(step) = input::parse_step(&cleaned) {
                                on_edit.call(SettingsEdit::IncrementValue(step));
                            }
                            increment_draft.set(cleaned);
                        },
                    }
                }
                div { class: "settings-panel__field",
                    label { r#for: "decrement-step", {t!("settings-decrement")} }
                    input {
                        id: "decrement-step",
                        class: "settings-panel__input",
                        inputmode: "numeric",
                        value: "{decrement_draft}",
                        oninput: move |evt: FormEvent| {
                            let cleaned = input::sanitize_count_input(&evt.value());
                            if let Some(step) = input::parse_step(&cleaned) {
                                on_edit.call(SettingsEdit::DecrementValue(step));
                            }
                            decrement_draft.set(cleaned);
                        },
                    }
                }
            }

            label { class: "settings-panel__toggle",
                input {
                    r#type: "checkbox",
                    checked: limits_enabled,
                    onchange: move |_| on_edit.call(SettingsEdit::LimitsEnabled(!limits_enabled)),
                }
                span { {t!("settings-limits")} }
            }

            div { class: "{limits_grid_class}",
                div { class: "settings-panel__field",
                    label { r#for: "min-limit", {t!("settings-min")} }
                    input {
                        id: "min-limit",
                        class: "settings-panel__input",
                        inputmode: "numeric",
                        placeholder: t!("settings-limit-placeholder"),
                        disabled: !limits_enabled,
                        value: "{min_draft}",
                        oninput: move |evt: FormEvent| {
                            let cleaned = input::sanitize_count_input(&evt.value());
                            if let Some(limit) = input::parse_limit(&cleaned) {
                                on_edit.call(SettingsEdit::MinValue(limit));
                            }
                            min_draft.set(cleaned);
                        },
                    }
                }
                div { class: "settings-panel__field",
                    label { r#for: "max-limit", {t!("settings-max")} }
                    input {
                        id: "max-limit",
                        class: "settings-panel__input",
                        inputmode: "numeric",
                        placeholder: t!("settings-limit-placeholder"),
                        disabled: !limits_enabled,
                        value: "{max_draft}",
                        oninput: move |evt: FormEvent| {
                            let cleaned = input::sanitize_count_input(&evt.value());
                            if let Some(limit) = input::parse_limit(&cleaned) {
                                on_edit.call(SettingsEdit::MaxValue(limit));
                            }
                            max_draft.set(cleaned);
                        },
                    }
                }
            }

            div { class: "settings-panel__field",
                span { class: "settings-panel__label", {t!("settings-theme")} }
                div { class: "swatches",
                    for color in ThemeColor::palette() {
                        button {
                            key: "{color}",
                            r#type: "button",
                            class: swatch_class(color == active_color),
                            style: "background-color: {color};",
                            aria_label: t!("settings-swatch-aria", color = color.to_string()),
                            onclick: move |_| on_edit.call(SettingsEdit::Theme(color)),
                        }
                    }
                }
            }

            if languages.len() > 1 {
                div { class: "settings-panel__field",
                    label { r#for: "locale-select", {t!("settings-language")} }
                    select {
                        id: "locale-select",
                        class: "settings-panel__input",
                        value: "{current_lang}",
                        oninput: on_language,
                        for code in languages.iter() {
                            option { key: "{code}", value: "{code}", "{code}" }
                        }
                    }
                }
            }
        }
    }
}

fn swatch_class(active: bool) -> &'static str {
    if active {
        "swatch swatch--active"
    } else {
        "swatch"
    }
}

#[component]
pub fn ResetPanel(count: i64, on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let _lang = i18n::use_language();
    rsx! {
        div { class: "reset-panel",
            p { class: "reset-panel__body", {t!("reset-body", count = count)} }
            div { class: "reset-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| on_cancel.call(()),
                    {t!("reset-cancel")}
                }
                button {
                    r#type: "button",
                    class: "button button--accent",
                    onclick: move |_| on_confirm.call(()),
                    {t!("reset-confirm")}
                }
            }
        }
    }
}
