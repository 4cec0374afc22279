//! Counter state and the rules for changing it.
//!
//! Every successful mutation returns the [`PendingWrite`] that mirrors it to
//! storage; the caller decides when to flush it. Rejected mutations leave the
//! state untouched.

use thiserror::Error;

use crate::core::settings::{CounterSettings, CounterSnapshot, PendingWrite, StorageKey};
use crate::core::theme::{ThemeColor, ThemeTokens};

/// Why a count change was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Decrement would go below zero. Silent.
    BelowZero,
    /// The sum does not fit in an `i64` and no max limit is active. Silent.
    Overflow,
    MaxReached(i64),
    MinReached(i64),
}

impl Rejection {
    /// The alert to show the user, if this rejection warrants one.
    pub fn alert(self) -> Option<LimitAlert> {
        match self {
            Rejection::BelowZero | Rejection::Overflow => None,
            Rejection::MaxReached(max) => Some(LimitAlert::Max(max)),
            Rejection::MinReached(min) => Some(LimitAlert::Min(min)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitAlert {
    Max(i64),
    Min(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("step values must be positive, got {0}")]
    NonPositiveStep(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetChoice {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterEngine {
    pub count: i64,
    pub settings: CounterSettings,
}

impl CounterEngine {
    pub fn from_snapshot(snapshot: CounterSnapshot) -> Self {
        Self {
            count: snapshot.count,
            settings: snapshot.settings,
        }
    }

    pub fn tokens(&self) -> ThemeTokens {
        ThemeTokens::from_color(self.settings.theme_color)
    }

    pub fn increment(&mut self) -> Result<PendingWrite, Rejection> {
        let max = self.active_max();
        let next = match self.count.checked_add(self.settings.increment_value) {
            Some(next) => next,
            None => {
                return Err(match max {
                    Some(max) => Rejection::MaxReached(max),
                    None => Rejection::Overflow,
                })
            }
        };
        if let Some(max) = max {
            if next > max {
                return Err(Rejection::MaxReached(max));
            }
        }
        Ok(self.apply_count(next))
    }

    pub fn decrement(&mut self) -> Result<PendingWrite, Rejection> {
        let next = self
            .count
            .checked_sub(self.settings.decrement_value)
            .ok_or(Rejection::BelowZero)?;
        if next < 0 {
            return Err(Rejection::BelowZero);
        }
        if let Some(min) = self.active_min() {
            if next < min {
                return Err(Rejection::MinReached(min));
            }
        }
        Ok(self.apply_count(next))
    }

    /// Overwrite the count with an already validated value.
    pub fn set_count(&mut self, value: i64) -> PendingWrite {
        self.apply_count(value)
    }

    pub fn reset(&mut self, choice: ResetChoice) -> Option<PendingWrite> {
        match choice {
            ResetChoice::Confirm => Some(self.apply_count(0)),
            ResetChoice::Cancel => None,
        }
    }

    pub fn set_increment_value(&mut self, value: i64) -> Result<PendingWrite, SettingsError> {
        if value <= 0 {
            return Err(SettingsError::NonPositiveStep(value));
        }
        self.settings.increment_value = value;
        Ok(PendingWrite::integer(StorageKey::IncrementValue, value))
    }

    pub fn set_decrement_value(&mut self, value: i64) -> Result<PendingWrite, SettingsError> {
        if value <= 0 {
            return Err(SettingsError::NonPositiveStep(value));
        }
        self.settings.decrement_value = value;
        Ok(PendingWrite::integer(StorageKey::DecrementValue, value))
    }

    pub fn set_max_value(&mut self, value: Option<i64>) -> PendingWrite {
        self.settings.max_value = value;
        PendingWrite::limit(StorageKey::MaxValue, value)
    }

    pub fn set_min_value(&mut self, value: Option<i64>) -> PendingWrite {
        self.settings.min_value = value;
        PendingWrite::limit(StorageKey::MinValue, value)
    }

    pub fn set_limits_enabled(&mut self, enabled: bool) -> PendingWrite {
        self.settings.limits_enabled = enabled;
        PendingWrite::flag(StorageKey::LimitsEnabled, enabled)
    }

    pub fn set_theme_color(&mut self, color: ThemeColor) -> PendingWrite {
        self.settings.theme_color = color;
        PendingWrite::theme(color)
    }

    fn active_max(&self) -> Option<i64> {
        self.settings
            .limits_enabled
            .then_some(self.settings.max_value)
            .flatten()
    }

    fn active_min(&self) -> Option<i64> {
        self.settings
            .limits_enabled
            .then_some(self.settings.min_value)
            .flatten()
    }

    fn apply_count(&mut self, value: i64) -> PendingWrite {
        self.count = value;
        PendingWrite::integer(StorageKey::Count, value)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::core::settings::{load_snapshot, write};
    use crate::core::storage::{KeyValueStore, MemoryStore};

    fn engine(count: i64) -> CounterEngine {
        CounterEngine {
            count,
            ..CounterEngine::default()
        }
    }

    fn with_limits(count: i64, min: Option<i64>, max: Option<i64>) -> CounterEngine {
        let mut eng = engine(count);
        eng.settings.limits_enabled = true;
        eng.settings.min_value = min;
        eng.settings.max_value = max;
        eng
    }

    #[test]
    fn increment_adds_step_without_limits() {
        for (start, step) in [(0, 1), (3, 4), (100, 25), (7, 1_000)] {
            let mut eng = engine(start);
            eng.settings.increment_value = step;
            let pending = eng.increment().expect("no limits");
            assert_eq!(eng.count, start + step);
            assert_eq!(pending, PendingWrite::integer(StorageKey::Count, start + step));
        }
    }

    #[test]
    fn max_is_ignored_while_limits_disabled() {
        let mut eng = engine(9);
        eng.settings.max_value = Some(9);
        assert!(eng.increment().is_ok());
        assert_eq!(eng.count, 10);
    }

    #[test]
    fn increment_past_max_is_rejected() {
        let mut eng = with_limits(8, None, Some(10));
        eng.settings.increment_value = 3;
        let err = eng.increment().unwrap_err();
        assert_eq!(err, Rejection::MaxReached(10));
        assert_eq!(err.alert(), Some(LimitAlert::Max(10)));
        assert_eq!(eng.count, 8);
    }

    #[test]
    fn increment_to_exactly_max_is_allowed() {
        let mut eng = with_limits(8, None, Some(10));
        eng.settings.increment_value = 2;
        assert!(eng.increment().is_ok());
        assert_eq!(eng.count, 10);
    }

    #[test]
    fn decrement_never_goes_below_zero() {
        for (start, step) in [(0, 1), (2, 3), (5, 100), (1, i64::MAX)] {
            let mut eng = engine(start);
            eng.settings.decrement_value = step;
            let err = eng.decrement().unwrap_err();
            assert_eq!(err, Rejection::BelowZero);
            assert_eq!(err.alert(), None);
            assert_eq!(eng.count, start);
        }

        let mut eng = engine(3);
        eng.settings.decrement_value = 3;
        assert!(eng.decrement().is_ok());
        assert_eq!(eng.count, 0);
    }

    #[test]
    fn decrement_below_min_is_rejected() {
        let mut eng = with_limits(6, Some(5), None);
        eng.settings.decrement_value = 2;
        let err = eng.decrement().unwrap_err();
        assert_eq!(err, Rejection::MinReached(5));
        assert_eq!(err.alert(), Some(LimitAlert::Min(5)));
        assert_eq!(eng.count, 6);
    }

    #[test]
    fn zero_floor_wins_over_negative_min() {
        let mut eng = with_limits(1, Some(-10), None);
        eng.settings.decrement_value = 2;
        assert_eq!(eng.decrement().unwrap_err(), Rejection::BelowZero);
    }

    #[test]
    fn overflow_without_limits_is_silent() {
        let mut eng = engine(i64::MAX - 1);
        eng.settings.increment_value = 5;
        let err = eng.increment().unwrap_err();
        assert_eq!(err, Rejection::Overflow);
        assert_eq!(err.alert(), None);
        assert_eq!(eng.count, i64::MAX - 1);
    }

    #[test]
    fn overflow_with_active_max_reports_the_max() {
        let mut eng = with_limits(i64::MAX, None, Some(100));
        let err = eng.increment().unwrap_err();
        assert_eq!(err, Rejection::MaxReached(100));
        assert_eq!(err.alert(), Some(LimitAlert::Max(100)));
    }

    #[test]
    fn reset_confirm_zeroes_and_persists() {
        let store = MemoryStore::new();
        let mut eng = engine(41);
        let pending = eng.reset(ResetChoice::Confirm).expect("confirm writes");
        block_on(write(&store, &pending)).expect("write");

        assert_eq!(eng.count, 0);
        assert_eq!(block_on(load_snapshot(&store)).count, 0);
        assert_eq!(
            block_on(store.get("count")).unwrap().as_deref(),
            Some("0")
        );
    }

    #[test]
    fn reset_cancel_keeps_count() {
        let mut eng = engine(41);
        assert_eq!(eng.reset(ResetChoice::Cancel), None);
        assert_eq!(eng.count, 41);
    }

    #[test]
    fn set_count_overwrites() {
        let mut eng = engine(4);
        let pending = eng.set_count(-12);
        assert_eq!(eng.count, -12);
        assert_eq!(pending.value, "-12");
    }

    #[test]
    fn steps_must_be_positive() {
        let mut eng = engine(0);
        assert_eq!(
            eng.set_increment_value(0),
            Err(SettingsError::NonPositiveStep(0))
        );
        assert_eq!(
            eng.set_decrement_value(-1),
            Err(SettingsError::NonPositiveStep(-1))
        );
        assert_eq!(eng.settings.increment_value, 1);

        let pending = eng.set_decrement_value(4).unwrap();
        assert_eq!(pending.key, StorageKey::DecrementValue);
        assert_eq!(eng.settings.decrement_value, 4);
    }

    #[test]
    fn each_setter_writes_its_own_key() {
        let mut eng = engine(0);
        let color = ThemeColor::parse("#ffffff").unwrap();
        let writes = [
            eng.set_increment_value(2).unwrap(),
            eng.set_max_value(Some(50)),
            eng.set_min_value(None),
            eng.set_limits_enabled(true),
            eng.set_theme_color(color),
        ];
        let keys: Vec<_> = writes.iter().map(|w| w.key).collect();
        assert_eq!(
            keys,
            [
                StorageKey::IncrementValue,
                StorageKey::MaxValue,
                StorageKey::MinValue,
                StorageKey::LimitsEnabled,
                StorageKey::ThemeColor
            ]
        );
        assert_eq!(writes[2].value, "null");
        assert!(!eng.tokens().is_dark);
    }

    #[test]
    fn snapshot_restores_engine() {
        let store = MemoryStore::new();
        let mut eng = engine(0);
        for pending in [
            eng.set_increment_value(5).unwrap(),
            eng.set_limits_enabled(true),
            eng.set_max_value(Some(12)),
            eng.increment().unwrap(),
            eng.increment().unwrap(),
        ] {
            block_on(write(&store, &pending)).unwrap();
        }

        let restored = CounterEngine::from_snapshot(block_on(load_snapshot(&store)));
        assert_eq!(restored, eng);
        assert_eq!(restored.count, 10);
    }
}
