//! The counter screen: state rules, overlay sequencing and the view.

mod engine;
pub use engine::{CounterEngine, LimitAlert, Rejection, ResetChoice, SettingsError};

mod overlay;
pub use overlay::{OverlayKind, OverlayPhase, OverlayState, OverlayTiming};

mod screen;
pub use screen::{CounterEvent, CounterScreen, Effects, SettingsEdit, Timer};

mod panels;
pub use panels::{InfoPanel, ResetPanel, SettingsPanel, INFO_URL};

mod view;
pub use view::CounterView;
