//! Shared UI crate for Tally. All cross-platform logic and views live here.

pub mod core;
pub mod counter;
pub mod i18n;
pub mod views;

pub mod components {
    // Gate that waits for the Inter web font (components/font_gate.rs)
    mod font_gate;
    pub use font_gate::{FontGate, FONT_TIMEOUT_MS};

    mod stylesheet;
    pub use stylesheet::AppStylesheet;

    mod overlay_frame;
    pub use overlay_frame::OverlayFrame;

    mod alert_dialog;
    pub use alert_dialog::LimitAlertDialog;
}
