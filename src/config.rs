//! Compile-time site configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage keys, root attribute names, and theme values are shared by the
//! controller, the browser adapters, and the stylesheet. Keeping them in one
//! place keeps those three layers in agreement.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the last explicitly chosen language code.
pub const STORAGE_LANGUAGE_KEY: &str = "cv-language";

/// `localStorage` key holding the last explicitly chosen theme marker.
pub const STORAGE_THEME_KEY: &str = "cv-theme";

/// Language used when nothing usable is persisted.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Root element attribute carrying the active language.
pub const LANG_ATTRIBUTE: &str = "lang";

/// Root element attribute carrying the active theme marker.
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const THEME_LIGHT: &str = "light";
pub const THEME_DARK: &str = "dark";

/// Media query answering "does the OS prefer a dark color scheme".
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Toggle glyph shown while the dark theme is active (click for light).
pub const GLYPH_SUN: &str = "☀️";

/// Toggle glyph shown while the light theme is active (click for dark).
pub const GLYPH_MOON: &str = "🌙";

/// Resolve a persisted value, treating empty strings as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
