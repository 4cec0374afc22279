#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::FontGate;
use ui::core::storage::{self, SharedStore};
use ui::views::Counter;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Counter {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[logger] already initialised: {err}");
    }
    info!("[app] starting Tally desktop v{}", env!("CARGO_PKG_VERSION"));

    // Phone-shaped window; the counter screen is laid out for portrait.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Tally – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(420.0, 780.0)),
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Language context; components subscribe through `i18n::use_language`.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    let store: SharedStore = use_hook(storage::default_store);
    use_context_provider(|| store);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        FontGate {
            Router::<Route> {}
        }
    }
}
