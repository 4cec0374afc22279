use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use futures::future::{self, Either};

use crate::core::timing;

const INTER_CSS: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;700&display=swap";

/// Resolves once both Inter weights are usable (or known to be missing).
const FONT_PROBE_JS: &str = r#"
await Promise.all([
    document.fonts.load("400 1em Inter"),
    document.fonts.load("700 1em Inter"),
]);
return document.fonts.check("700 1em Inter");
"#;

pub const FONT_TIMEOUT_MS: u64 = 3_000;

/// Holds back its children until the Inter web font has loaded.
///
/// A failed or slow load is logged and the app renders with the fallback
/// font stack instead of staying blank.
#[component]
pub fn FontGate(children: Element) -> Element {
    let mut ready = use_signal(|| false);

    use_future(move || async move {
        let probe = Box::pin(document::eval(FONT_PROBE_JS).join::<bool>());
        let timeout = Box::pin(timing::sleep_ms(FONT_TIMEOUT_MS));

        match future::select(probe, timeout).await {
            Either::Left((Ok(true), _)) => info!("[fonts] Inter loaded"),
            Either::Left((Ok(false), _)) => {
                warn!("[fonts] Inter unavailable; using fallback fonts")
            }
            Either::Left((Err(err), _)) => warn!("[fonts] font probe failed: {err:?}"),
            Either::Right(_) => {
                warn!("[fonts] Inter not ready after {FONT_TIMEOUT_MS} ms; continuing")
            }
        }
        ready.set(true);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: INTER_CSS }
        if ready() {
            {children}
        } else {
            div { class: "font-gate", aria_busy: "true" }
        }
    }
}
