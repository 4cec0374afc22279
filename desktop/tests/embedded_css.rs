#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) stays present and keeps the
//! custom properties that `ThemeTokens::css_vars` writes.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

use ui::core::theme::ThemeTokens;

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn every_theme_token_is_consumed_by_the_stylesheet() {
    let vars = ThemeTokens::default().css_vars();
    let names: Vec<&str> = vars
        .split(';')
        .filter_map(|decl| decl.split(':').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    assert_eq!(names.len(), 7, "unexpected token list: {names:?}");

    for name in names {
        assert!(
            EMBEDDED_CSS.contains(&format!("var({name})")),
            "Theme token `{name}` is set inline but never used in main.css"
        );
    }
}
