use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::components::{LimitAlertDialog, OverlayFrame};
use crate::core::settings::{self, PendingWrite};
use crate::core::storage::{self, SharedStore};
use crate::core::{format, platform, timing};
use crate::{i18n, t};

use super::engine::{CounterEngine, ResetChoice};
use super::overlay::OverlayKind;
use super::panels::{InfoPanel, ResetPanel, SettingsPanel};
use super::screen::{CounterEvent, CounterScreen, Timer};

#[component]
pub fn CounterView() -> Element {
    let _lang = i18n::use_language();
    let store: SharedStore =
        use_hook(|| try_consume_context::<SharedStore>().unwrap_or_else(storage::default_store));
    let screen = use_signal(CounterScreen::default);
    let loaded = use_signal(|| false);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<CounterEvent>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    let coroutine = {
        let sender_slot = sender_slot.clone();
        let store = store.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<CounterEvent>| {
            let sender_slot = sender_slot.clone();
            let store = store.clone();
            let mut screen_signal = screen;
            let mut loaded_signal = loaded;

            async move {
                // Anything the user does before the load finishes queues up behind it.
                let snapshot = settings::load_snapshot(&*store).await;
                info!(
                    "[counter] restored count={} limits_enabled={}",
                    snapshot.count, snapshot.settings.limits_enabled
                );
                screen_signal.with_mut(|s| s.engine = CounterEngine::from_snapshot(snapshot));
                loaded_signal.set(true);

                while let Some(event) = rx.next().await {
                    debug!("[counter] event {event:?}");
                    let effects = screen_signal.with_mut(|s| s.apply(event));
                    if let Some(pending) = effects.write {
                        persist(store.clone(), pending);
                    }
                    if let Some(timer) = effects.timer {
                        queue_after(sender_slot.clone(), timer);
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send_event = move |event: CounterEvent| coroutine.send(event);

    let CounterScreen {
        engine: snapshot,
        overlay: overlay_state,
        alert,
        ..
    } = screen();
    let tokens = snapshot.tokens();
    let theme_style = tokens.css_vars();
    let icon_bar_class = if overlay_state.is_closed() {
        "icon-bar"
    } else {
        "icon-bar icon-bar--hidden"
    };
    let screen_class = if tokens.is_dark {
        "counter-screen counter-screen--dark"
    } else {
        "counter-screen counter-screen--light"
    };
    let value_class = if loaded() {
        "counter__value"
    } else {
        "counter__value counter__value--loading"
    };
    let increment_label = format::format_increment(snapshot.settings.increment_value);
    let decrement_label = format::format_decrement(snapshot.settings.decrement_value);

    let overlay_body = overlay_state.kind().map(|kind| {
        let body = match kind {
            OverlayKind::Info => rsx! { InfoPanel {} },
            OverlayKind::Settings => rsx! {
                SettingsPanel {
                    settings: snapshot.settings.clone(),
                    count: snapshot.count,
                    on_edit: move |edit| send_event(CounterEvent::Edit(edit)),
                    on_set_count: move |value| send_event(CounterEvent::SetCount(value)),
                }
            },
            OverlayKind::Reset => rsx! {
                ResetPanel {
                    count: snapshot.count,
                    on_confirm: move |_| send_event(CounterEvent::Reset(ResetChoice::Confirm)),
                    on_cancel: move |_| send_event(CounterEvent::Reset(ResetChoice::Cancel)),
                }
            },
        };
        (kind, body)
    });

    rsx! {
        div { class: "{screen_class}", style: "{theme_style}",
            header { class: "{icon_bar_class}",
                button {
                    r#type: "button",
                    class: "icon-bar__button",
                    aria_label: t!("icon-info"),
                    onclick: move |_| send_event(CounterEvent::Open(OverlayKind::Info)),
                    "i"
                }
                button {
                    r#type: "button",
                    class: "icon-bar__button",
                    aria_label: t!("icon-settings"),
                    onclick: move |_| send_event(CounterEvent::Open(OverlayKind::Settings)),
                    "⚙"
                }
                button {
                    r#type: "button",
                    class: "icon-bar__button",
                    aria_label: t!("icon-reset"),
                    onclick: move |_| send_event(CounterEvent::Open(OverlayKind::Reset)),
                    "↺"
                }
            }

            main { class: "counter",
                span { class: "counter__label", {t!("counter-label")} }
                span { class: "{value_class}", "{snapshot.count}" }
                div { class: "counter__steps",
                    button {
                        r#type: "button",
                        class: "step step--decrement",
                        aria_label: t!("counter-decrement-aria", step = snapshot.settings.decrement_value),
                        onclick: move |_| send_event(CounterEvent::Decrement),
                        "{decrement_label}"
                    }
                    button {
                        r#type: "button",
                        class: "step step--increment",
                        aria_label: t!("counter-increment-aria", step = snapshot.settings.increment_value),
                        onclick: move |_| send_event(CounterEvent::Increment),
                        "{increment_label}"
                    }
                }
            }

            if let Some((kind, body)) = overlay_body {
                OverlayFrame {
                    class: overlay_state.css_class(),
                    title: overlay_title(kind),
                    on_close: move |_| send_event(CounterEvent::Close),
                    {body}
                }
            }

            if let Some(active_alert) = alert {
                LimitAlertDialog {
                    alert: active_alert,
                    on_dismiss: move |_| send_event(CounterEvent::DismissAlert),
                }
            }
        }
    }
}

fn overlay_title(kind: OverlayKind) -> String {
    match kind {
        OverlayKind::Info => t!("info-title"),
        OverlayKind::Settings => t!("settings-title"),
        OverlayKind::Reset => t!("reset-title"),
    }
}

/// Fire-and-forget write. Failures are logged and never retried.
fn persist(store: SharedStore, pending: PendingWrite) {
    platform::spawn_future(async move {
        if let Err(err) = settings::write(&*store, &pending).await {
            error!("[counter] failed saving {}: {err}", pending.key.as_str());
        }
    });
}

fn queue_after(sender_slot: Rc<RefCell<Option<UnboundedSender<CounterEvent>>>>, timer: Timer) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(timer.delay_ms).await;
            let _ = sender.unbounded_send(timer.event);
        });
    }
}
