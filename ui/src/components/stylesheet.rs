use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Shared theme stylesheet (linked, and inlined for release native bundles).
#[component]
pub fn AppStylesheet() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{MAIN_CSS_INLINE}" }
        }
    }
}
