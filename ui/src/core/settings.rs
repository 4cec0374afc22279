//! Persisted counter settings: storage keys, value encoding and loading.
//!
//! Every field lives under its own key and is written independently. Values
//! are strings: integers in decimal, `"null"` for an absent limit and
//! `"true"`/`"false"` for the limits flag.

use dioxus::logger::tracing::{debug, warn};

use super::storage::{KeyValueStore, StoreError};
use super::theme::ThemeColor;

const NULL_SENTINEL: &str = "null";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Count,
    IncrementValue,
    DecrementValue,
    MaxValue,
    MinValue,
    ThemeColor,
    LimitsEnabled,
}

impl StorageKey {
    pub const ALL: [StorageKey; 7] = [
        StorageKey::Count,
        StorageKey::IncrementValue,
        StorageKey::DecrementValue,
        StorageKey::MaxValue,
        StorageKey::MinValue,
        StorageKey::ThemeColor,
        StorageKey::LimitsEnabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Count => "count",
            StorageKey::IncrementValue => "incrementValue",
            StorageKey::DecrementValue => "decrementValue",
            StorageKey::MaxValue => "maxValue",
            StorageKey::MinValue => "minValue",
            StorageKey::ThemeColor => "themeColor",
            StorageKey::LimitsEnabled => "limitsEnabled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterSettings {
    pub increment_value: i64,
    pub decrement_value: i64,
    pub max_value: Option<i64>,
    pub min_value: Option<i64>,
    pub theme_color: ThemeColor,
    pub limits_enabled: bool,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            increment_value: 1,
            decrement_value: 1,
            max_value: None,
            min_value: None,
            theme_color: ThemeColor::default(),
            limits_enabled: false,
        }
    }
}

/// Everything the counter screen restores when it mounts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterSnapshot {
    pub count: i64,
    pub settings: CounterSettings,
}

/// A single key/value write produced by a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub key: StorageKey,
    pub value: String,
}

impl PendingWrite {
    pub fn integer(key: StorageKey, value: i64) -> Self {
        Self {
            key,
            value: value.to_string(),
        }
    }

    pub fn limit(key: StorageKey, value: Option<i64>) -> Self {
        Self {
            key,
            value: encode_limit(value),
        }
    }

    pub fn flag(key: StorageKey, value: bool) -> Self {
        Self {
            key,
            value: value.to_string(),
        }
    }

    pub fn theme(color: ThemeColor) -> Self {
        Self {
            key: StorageKey::ThemeColor,
            value: color.to_string(),
        }
    }
}

pub fn encode_limit(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NULL_SENTINEL.to_string(),
    }
}

pub fn decode_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// `Some(None)` for the null sentinel, `None` when the value is unreadable.
pub fn decode_limit(raw: &str) -> Option<Option<i64>> {
    let raw = raw.trim();
    if raw == NULL_SENTINEL {
        return Some(None);
    }
    decode_integer(raw).map(Some)
}

pub fn decode_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Perform one write against the store.
pub async fn write<S: KeyValueStore + ?Sized>(
    store: &S,
    pending: &PendingWrite,
) -> Result<(), StoreError> {
    store.set(pending.key.as_str(), &pending.value).await
}

/// Read every key, keeping defaults for anything missing, unreadable or failing.
pub async fn load_snapshot<S: KeyValueStore + ?Sized>(store: &S) -> CounterSnapshot {
    let mut snapshot = CounterSnapshot::default();

    for key in StorageKey::ALL {
        let raw = match store.get(key.as_str()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => continue,
            Err(err) => {
                warn!("[settings] failed loading {}: {err}", key.as_str());
                continue;
            }
        };

        if !apply_raw(&mut snapshot, key, &raw) {
            warn!(
                "[settings] ignoring unreadable value {raw:?} for {}",
                key.as_str()
            );
        }
    }

    debug!("[settings] loaded snapshot {snapshot:?}");
    snapshot
}

fn apply_raw(snapshot: &mut CounterSnapshot, key: StorageKey, raw: &str) -> bool {
    let settings = &mut snapshot.settings;
    match key {
        StorageKey::Count => match decode_integer(raw) {
            Some(count) => snapshot.count = count,
            None => return false,
        },
        StorageKey::IncrementValue => match decode_integer(raw).filter(|v| *v > 0) {
            Some(step) => settings.increment_value = step,
            None => return false,
        },
        StorageKey::DecrementValue => match decode_integer(raw).filter(|v| *v > 0) {
            Some(step) => settings.decrement_value = step,
            None => return false,
        },
        StorageKey::MaxValue => match decode_limit(raw) {
            Some(limit) => settings.max_value = limit,
            None => return false,
        },
        StorageKey::MinValue => match decode_limit(raw) {
            Some(limit) => settings.min_value = limit,
            None => return false,
        },
        StorageKey::ThemeColor => match ThemeColor::parse(raw) {
            Some(color) => settings.theme_color = color,
            None => return false,
        },
        StorageKey::LimitsEnabled => match decode_flag(raw) {
            Some(enabled) => settings.limits_enabled = enabled,
            None => return false,
        },
    }
    true
}
