//! Everything the counter screen reacts to, folded into one state value.
//!
//! [`CounterScreen::apply`] is pure: the view runs it inside its event loop
//! and then carries out the returned [`Effects`] (storage writes and
//! animation timers).

use dioxus::logger::tracing::debug;

use crate::core::settings::PendingWrite;
use crate::core::theme::ThemeColor;

use super::engine::{CounterEngine, LimitAlert, ResetChoice, SettingsError};
use super::overlay::{OverlayKind, OverlayState, OverlayTiming};

/// A single settings change requested from the settings panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsEdit {
    IncrementValue(i64),
    DecrementValue(i64),
    MaxValue(Option<i64>),
    MinValue(Option<i64>),
    LimitsEnabled(bool),
    Theme(ThemeColor),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterEvent {
    Increment,
    Decrement,
    SetCount(i64),
    Edit(SettingsEdit),
    Reset(ResetChoice),
    Open(OverlayKind),
    Close,
    EnterFinished(u64),
    ExitFinished(u64),
    DismissAlert,
}

/// Deliver `event` back to the screen after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    pub delay_ms: u64,
    pub event: CounterEvent,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    pub write: Option<PendingWrite>,
    pub timer: Option<Timer>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterScreen {
    pub engine: CounterEngine,
    pub overlay: OverlayState,
    pub alert: Option<LimitAlert>,
    pub timing: OverlayTiming,
}

impl CounterScreen {
    pub fn apply(&mut self, event: CounterEvent) -> Effects {
        let mut effects = Effects::default();
        match event {
            CounterEvent::Increment | CounterEvent::Decrement => {
                let outcome = if event == CounterEvent::Increment {
                    self.engine.increment()
                } else {
                    self.engine.decrement()
                };
                match outcome {
                    Ok(pending) => effects.write = Some(pending),
                    Err(rejection) => {
                        debug!("[counter] rejected {event:?}: {rejection:?}");
                        if let Some(alert) = rejection.alert() {
                            self.alert = Some(alert);
                        }
                    }
                }
            }
            CounterEvent::SetCount(value) => effects.write = Some(self.engine.set_count(value)),
            CounterEvent::Edit(edit) => match apply_edit(&mut self.engine, edit) {
                Ok(pending) => effects.write = Some(pending),
                Err(err) => debug!("[counter] ignored settings edit: {err}"),
            },
            CounterEvent::Reset(choice) => {
                effects.write = self.engine.reset(choice);
                effects.timer = self.close_overlay();
            }
            CounterEvent::Open(kind) => {
                effects.timer = self.overlay.open(kind).map(|generation| Timer {
                    delay_ms: self.timing.enter_ms,
                    event: CounterEvent::EnterFinished(generation),
                });
            }
            CounterEvent::Close => effects.timer = self.close_overlay(),
            CounterEvent::EnterFinished(generation) => {
                self.overlay.entered(generation);
            }
            CounterEvent::ExitFinished(generation) => {
                self.overlay.exit_complete(generation);
            }
            CounterEvent::DismissAlert => self.alert = None,
        }
        effects
    }

    fn close_overlay(&mut self) -> Option<Timer> {
        self.overlay.close().map(|generation| Timer {
            delay_ms: self.timing.exit_ms,
            event: CounterEvent::ExitFinished(generation),
        })
    }
}

fn apply_edit(engine: &mut CounterEngine, edit: SettingsEdit) -> Result<PendingWrite, SettingsError> {
    match edit {
        SettingsEdit::IncrementValue(step) => engine.set_increment_value(step),
        SettingsEdit::DecrementValue(step) => engine.set_decrement_value(step),
        SettingsEdit::MaxValue(limit) => Ok(engine.set_max_value(limit)),
        SettingsEdit::MinValue(limit) => Ok(engine.set_min_value(limit)),
        SettingsEdit::LimitsEnabled(enabled) => Ok(engine.set_limits_enabled(enabled)),
        SettingsEdit::Theme(color) => Ok(engine.set_theme_color(color)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::StorageKey;
    use crate::counter::OverlayPhase;

    /// Open `kind` and let the entrance animation finish.
    fn screen_with_open(kind: OverlayKind) -> CounterScreen {
        let mut screen = CounterScreen::default();
        screen.engine.count = 7;
        let timer = screen.apply(CounterEvent::Open(kind)).timer.expect("enter timer");
        assert_eq!(timer.delay_ms, 320);
        screen.apply(timer.event);
        assert_eq!(screen.overlay.phase, OverlayPhase::Open(kind));
        screen
    }

    fn finish(screen: &mut CounterScreen, effects: Effects) {
        let timer = effects.timer.expect("exit timer");
        assert_eq!(timer.delay_ms, 240);
        screen.apply(timer.event);
    }

    #[test]
    fn reset_confirm_writes_zero_and_closes() {
        let mut screen = screen_with_open(OverlayKind::Reset);
        let effects = screen.apply(CounterEvent::Reset(ResetChoice::Confirm));

        assert_eq!(screen.engine.count, 0);
        assert_eq!(effects.write, Some(PendingWrite::integer(StorageKey::Count, 0)));
        assert_eq!(screen.overlay.phase, OverlayPhase::Exiting(OverlayKind::Reset));

        finish(&mut screen, effects);
        assert!(screen.overlay.is_closed());
    }

    #[test]
    fn reset_cancel_closes_without_writing() {
        let mut screen = screen_with_open(OverlayKind::Reset);
        let effects = screen.apply(CounterEvent::Reset(ResetChoice::Cancel));

        assert_eq!(screen.engine.count, 7);
        assert_eq!(effects.write, None);
        assert_eq!(screen.overlay.phase, OverlayPhase::Exiting(OverlayKind::Reset));

        finish(&mut screen, effects);
        assert!(screen.overlay.is_closed());
    }

    #[test]
    fn max_rejection_raises_alert_until_dismissed() {
        let mut screen = CounterScreen::default();
        screen.engine.count = 10;
        screen.engine.settings.limits_enabled = true;
        screen.engine.settings.max_value = Some(10);

        let effects = screen.apply(CounterEvent::Increment);
        assert_eq!(effects, Effects::default());
        assert_eq!(screen.alert, Some(LimitAlert::Max(10)));
        assert_eq!(screen.engine.count, 10);

        screen.apply(CounterEvent::DismissAlert);
        assert_eq!(screen.alert, None);
    }

    #[test]
    fn min_rejection_raises_alert() {
        let mut screen = CounterScreen::default();
        screen.engine.count = 5;
        screen.engine.settings.limits_enabled = true;
        screen.engine.settings.min_value = Some(5);

        screen.apply(CounterEvent::Decrement);
        assert_eq!(screen.alert, Some(LimitAlert::Min(5)));
    }

    #[test]
    fn below_zero_and_overflow_stay_silent() {
        let mut screen = CounterScreen::default();
        assert_eq!(screen.apply(CounterEvent::Decrement), Effects::default());
        assert_eq!(screen.alert, None);

        screen.engine.count = i64::MAX;
        assert_eq!(screen.apply(CounterEvent::Increment), Effects::default());
        assert_eq!(screen.alert, None);
    }

    #[test]
    fn accepted_changes_produce_one_write() {
        let mut screen = CounterScreen::default();
        let effects = screen.apply(CounterEvent::Increment);
        assert_eq!(effects.write, Some(PendingWrite::integer(StorageKey::Count, 1)));
        assert_eq!(effects.timer, None);

        let effects = screen.apply(CounterEvent::SetCount(40));
        assert_eq!(effects.write.map(|w| w.value), Some("40".to_string()));

        let effects = screen.apply(CounterEvent::Edit(SettingsEdit::LimitsEnabled(true)));
        assert_eq!(effects.write.map(|w| w.key), Some(StorageKey::LimitsEnabled));
        assert!(screen.engine.settings.limits_enabled);
    }

    #[test]
    fn invalid_edit_is_dropped() {
        let mut screen = CounterScreen::default();
        let effects = screen.apply(CounterEvent::Edit(SettingsEdit::IncrementValue(0)));
        assert_eq!(effects, Effects::default());
        assert_eq!(screen.engine.settings.increment_value, 1);
    }

    #[test]
    fn close_while_closed_schedules_nothing() {
        let mut screen = CounterScreen::default();
        assert_eq!(screen.apply(CounterEvent::Close).timer, None);
        assert_eq!(
            screen.apply(CounterEvent::Reset(ResetChoice::Cancel)),
            Effects::default()
        );
    }

    #[test]
    fn late_enter_timer_does_not_reopen() {
        let mut screen = CounterScreen::default();
        let enter = screen.apply(CounterEvent::Open(OverlayKind::Info)).timer.unwrap();
        let exit = screen.apply(CounterEvent::Close).timer.unwrap();

        screen.apply(enter.event);
        assert_eq!(screen.overlay.phase, OverlayPhase::Exiting(OverlayKind::Info));
        screen.apply(exit.event);
        assert!(screen.overlay.is_closed());
    }
}
