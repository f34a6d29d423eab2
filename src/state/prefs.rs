//! Active display preferences (language and theme).
//!
//! DESIGN
//! ======
//! Markers are kept as strings so unknown values flow through unchanged: a
//! stored `"sepia"` theme is applied verbatim and toggles to light. `Theme`
//! names the two values the site ships styles for.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::config::{GLYPH_MOON, GLYPH_SUN, THEME_DARK, THEME_LIGHT};

/// Currently applied preferences. `None` means nothing applied yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreferenceState {
    pub language: Option<String>,
    pub theme: Option<String>,
}

/// Color themes with shipped styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => THEME_LIGHT,
            Theme::Dark => THEME_DARK,
        }
    }

    /// Map the OS `prefers-color-scheme: dark` answer to a theme.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    /// Theme a toggle switches to from `marker`.
    ///
    /// An unset marker counts as light. Anything other than `"light"`,
    /// including unknown markers, toggles to light.
    pub fn opposite(marker: Option<&str>) -> Self {
        match marker.unwrap_or(THEME_LIGHT) {
            THEME_LIGHT => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl PreferenceState {
    pub fn is_language_active(&self, lang: &str) -> bool {
        self.language.as_deref() == Some(lang)
    }

    /// Glyph for the theme toggle: the sun while dark, the moon otherwise.
    pub fn theme_glyph(&self) -> &'static str {
        theme_glyph(self.theme.as_deref())
    }
}

pub fn theme_glyph(theme: Option<&str>) -> &'static str {
    if theme == Some(THEME_DARK) { GLYPH_SUN } else { GLYPH_MOON }
}

/// Class list for a language-tagged résumé region.
pub fn resume_class(active: bool) -> &'static str {
    if active { "resume resume--active" } else { "resume" }
}

/// Class list for a language selector button.
pub fn language_button_class(active: bool) -> &'static str {
    if active {
        "language-switcher__btn language-switcher__btn--active"
    } else {
        "language-switcher__btn"
    }
}
