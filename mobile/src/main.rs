use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::{AppStylesheet, FontGate};
use ui::core::storage::{self, SharedStore};
use ui::views::Counter;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Counter {},
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[logger] already initialised: {err}");
    }
    info!("[app] starting Tally mobile v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Language context; components subscribe through `i18n::use_language`.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    let store: SharedStore = use_hook(storage::default_store);
    use_context_provider(|| store);

    rsx! {
        AppStylesheet {}

        // Nothing renders until the Inter font is ready (or has timed out).
        FontGate {
            Router::<Route> {}
        }
    }
}
