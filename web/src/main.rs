use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::{AppStylesheet, FontGate};
use ui::core::storage::{self, SharedStore};
use ui::i18n;
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
    info!("[app] starting Tally web v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    let store: SharedStore = use_hook(storage::default_store);
    use_context_provider(|| store);

    rsx! {
        // Global app resources
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1, viewport-fit=cover" }
        document::Title { "Tally" }
        AppStylesheet {}

        FontGate {
            Router::<Route> {}
        }
    }
}
