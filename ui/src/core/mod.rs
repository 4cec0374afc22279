//! Platform-agnostic building blocks: persistence, theme math, input parsing.

pub mod format;
pub mod input;
pub mod platform;
pub mod settings;
pub mod storage;
pub mod theme;
pub mod timing;
