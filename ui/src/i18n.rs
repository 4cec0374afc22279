//! Fluent catalogs for Tally, embedded from `i18n/<lang>/tally-ui.ftl`.
//!
//! `en-US` is the fallback and defines every message; other locales mirror
//! its ids and `$variables` (checked by `tests/i18n_catalog.rs`). Components
//! look strings up with [`t!`](crate::t) and call [`use_language`] so they
//! re-render when the picker in the settings panel switches locale.
use std::sync::Once;

use dioxus::logger::tracing::{info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through the shared [`LOADER`].
///
/// ```ignore
/// t!("counter-label")
/// t!("alert-max-body", value = 10)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Catalog file stem, `i18n/<lang>/tally-ui.ftl`.
const DOMAIN: &str = "tally-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Catalogs;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(new_loader);

static LANGUAGES: Lazy<Vec<String>> = Lazy::new(|| {
    let mut tags: Vec<String> = Catalogs::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    tags.sort();
    tags.dedup();
    tags
});

static INIT: Once = Once::new();

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("not a language tag: {0}")]
    InvalidTag(String),
    #[error("no catalog embedded for {0}")]
    NotEmbedded(String),
    #[error(transparent)]
    Select(#[from] I18nEmbedError),
}

fn new_loader() -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("fallback tag parses");
    FluentLanguageLoader::new(DOMAIN, fallback)
}

/// Load catalogs for the system locale list. Safe to call on every render.
pub fn init() {
    INIT.call_once(|| {
        match i18n_embed::select(&*LOADER, &Catalogs, &requested_languages()) {
            Ok(_) => info!("[i18n] using {}", current_language()),
            Err(err) => warn!("[i18n] locale selection failed ({err}); using {FALLBACK}"),
        }
    });
}

/// Switch every subsequent `t!` lookup to `tag`. The loader is left unchanged on error.
pub fn set_language(tag: &str) -> Result<(), LanguageError> {
    select_into(&LOADER, tag)
}

fn select_into(loader: &FluentLanguageLoader, tag: &str) -> Result<(), LanguageError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LanguageError::InvalidTag(tag.to_string()))?;
    if !LANGUAGES.iter().any(|known| *known == lang.to_string()) {
        return Err(LanguageError::NotEmbedded(tag.to_string()));
    }
    i18n_embed::select(loader, &Catalogs, &[lang])?;
    Ok(())
}

/// Subscribe the calling component to the `Signal<String>` language context.
///
/// Returns the current tag, or an empty string when no launcher provided one.
pub fn use_language() -> String {
    dioxus::prelude::try_use_context::<dioxus::prelude::Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Tags with an embedded catalog, sorted.
pub fn available_languages() -> Vec<String> {
    LANGUAGES.clone()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
