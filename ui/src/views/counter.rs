use dioxus::prelude::*;

use crate::counter::CounterView;

#[component]
pub fn Counter() -> Element {
    rsx! {
        section { class: "page page-counter",
            CounterView {}
        }
    }
}
