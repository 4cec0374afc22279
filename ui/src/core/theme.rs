//! Theme color palette and the token set derived from a single base color.

use std::fmt;

/// Swatches offered by the theme picker, in display order.
pub const PALETTE: [&str; 16] = [
    "#000000", "#1f2937", "#374151", "#6b7280", "#ffffff", "#f5f5dc", "#fde68a", "#f59e0b",
    "#ef4444", "#be123c", "#ec4899", "#8b5cf6", "#3b82f6", "#06b6d4", "#10b981", "#166534",
];

/// Base color used until the user picks a swatch.
pub const DEFAULT_THEME: ThemeColor = ThemeColor(Rgb::new(0, 0, 0));

/// Luminance at or above which a base color counts as light.
pub const LIGHT_THRESHOLD: f64 = 0.5;

const TEXT_ON_DARK: Rgb = Rgb::new(0xff, 0xff, 0xff);
const TEXT_ON_LIGHT: Rgb = Rgb::new(0x11, 0x11, 0x11);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance in `0.0..=1.0`.
    pub fn luminance(self) -> f64 {
        (0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b))
            / 255.0
    }

    /// Linear blend toward `other`; `amount` is clamped to `0.0..=1.0`.
    pub fn mix(self, other: Rgb, amount: f64) -> Rgb {
        let t = amount.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }
}

/// A validated `#rrggbb` theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColor(Rgb);

impl ThemeColor {
    /// Accepts `#rrggbb` or `rrggbb`, any case.
    pub fn parse(raw: &str) -> Option<Self> {
        let hex = raw.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(Rgb::new(channel(0)?, channel(2)?, channel(4)?)))
    }

    pub fn rgb(self) -> Rgb {
        self.0
    }

    pub fn luminance(self) -> f64 {
        self.0.luminance()
    }

    pub fn is_dark(self) -> bool {
        self.luminance() < LIGHT_THRESHOLD
    }

    pub fn palette() -> impl Iterator<Item = ThemeColor> {
        PALETTE.iter().filter_map(|hex| ThemeColor::parse(hex))
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.hex())
    }
}

/// Colors derived from the base theme color. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTokens {
    pub base: String,
    pub is_dark: bool,
    pub text: String,
    pub muted_text: String,
    pub border: String,
    pub border_strong: String,
    pub surface: String,
    pub scrim: String,
}

impl ThemeTokens {
    pub fn from_color(color: ThemeColor) -> Self {
        let base = color.rgb();
        let is_dark = color.is_dark();
        let text = if is_dark { TEXT_ON_DARK } else { TEXT_ON_LIGHT };

        Self {
            base: base.hex(),
            is_dark,
            text: text.hex(),
            muted_text: text.rgba(0.7),
            border: text.rgba(0.2),
            border_strong: text.rgba(0.45),
            surface: base.mix(text, 0.08).hex(),
            scrim: base.rgba(0.85),
        }
    }

    /// Inline CSS custom properties consumed by `main.css`.
    pub fn css_vars(&self) -> String {
        format!(
            "--theme-base: {}; --theme-text: {}; --theme-text-muted: {}; \
             --theme-border: {}; --theme-border-strong: {}; --theme-surface: {}; \
             --theme-scrim: {};",
            self.base,
            self.text,
            self.muted_text,
            self.border,
            self.border_strong,
            self.surface,
            self.scrim
        )
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::from_color(ThemeColor::default())
    }
}
