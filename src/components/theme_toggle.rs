//! Light/dark theme toggle.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::controller::Preferences;
use crate::state::prefs::Theme;

/// Button whose glyph names the theme a click switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let title = move || toggle_title(prefs.get().theme.as_deref());

    view! {
        <button
            type="button"
            class="theme-toggle"
            title=title
            aria-label=title
            on:click=move |_| prefs.toggle_theme()
        >
            <span class="theme-toggle__icon">{move || prefs.get().theme_glyph()}</span>
        </button>
    }
}

pub fn toggle_title(theme: Option<&str>) -> String {
    format!("Switch to {} theme", Theme::opposite(theme).as_str())
}
