//! Language and theme preference controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences are resolved once at startup (persisted value, else a default)
//! and afterwards change only through explicit user actions or, while the user
//! has never picked a theme, OS color-scheme notifications.
//!
//! DESIGN
//! ======
//! [`PreferenceController`] owns the storage backend and the document root;
//! the active preferences are an explicit [`PreferenceState`] passed in by the
//! caller. [`Preferences`] pairs the two for components via Leptos context.
//!
//! TRADE-OFFS
//! ==========
//! Startup persists the resolved language. The theme is only persisted by
//! explicit user actions: startup fallbacks and OS-driven theme changes are
//! rendered but not stored, so an absent `cv-theme` keeps meaning
//! "never chosen" and the OS keeps being followed until the user chooses.
//! Storage failures are logged and swallowed: presentation always updates.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::config::{
    DEFAULT_LANGUAGE, LANG_ATTRIBUTE, STORAGE_LANGUAGE_KEY, STORAGE_THEME_KEY, THEME_ATTRIBUTE, non_empty,
};
use crate::state::prefs::{PreferenceState, Theme};
use crate::util::document::{DocumentRoot, default_root};
use crate::util::storage::{PreferenceStore, default_store};

pub struct PreferenceController {
    store: Box<dyn PreferenceStore>,
    root: Box<dyn DocumentRoot>,
}

impl PreferenceController {
    pub fn new(store: Box<dyn PreferenceStore>, root: Box<dyn DocumentRoot>) -> Self {
        Self { store, root }
    }

    /// Controller over `localStorage` and `<html>` in the browser, or
    /// session-only fakes elsewhere.
    pub fn for_environment() -> Self {
        Self::new(default_store(), default_root())
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn root(&self) -> &dyn DocumentRoot {
        self.root.as_ref()
    }

    /// Resolve and render the initial preferences.
    ///
    /// Language: persisted value, else [`DEFAULT_LANGUAGE`]; applied and
    /// persisted. Theme: persisted value, else the OS preference given by
    /// `system_prefers_dark`; rendered only, so an OS fallback is never stored.
    pub fn startup(&mut self, system_prefers_dark: bool) -> PreferenceState {
        let mut state = PreferenceState::default();

        let language = self
            .load(STORAGE_LANGUAGE_KEY)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned());
        self.apply_language(&mut state, &language);

        let theme = self
            .load(STORAGE_THEME_KEY)
            .unwrap_or_else(|| Theme::from_prefers_dark(system_prefers_dark).as_str().to_owned());
        self.render_theme(&mut state, &theme);

        log::info!("cv site initialized (language={language}, theme={theme})");
        state
    }

    /// Show `lang` and persist it. Any code is accepted.
    pub fn apply_language(&mut self, state: &mut PreferenceState, lang: &str) {
        self.render_language(state, lang);
        self.save(STORAGE_LANGUAGE_KEY, lang);
    }

    /// Switch to `theme` and persist it. Any marker is accepted.
    pub fn apply_theme(&mut self, state: &mut PreferenceState, theme: &str) {
        self.render_theme(state, theme);
        self.save(STORAGE_THEME_KEY, theme);
    }

    /// Switch to the opposite of the root `data-theme` marker (unset counts
    /// as light).
    pub fn toggle_theme(&mut self, state: &mut PreferenceState) {
        let current = self.root.attribute(THEME_ATTRIBUTE);
        let next = Theme::opposite(current.as_deref());
        self.apply_theme(state, next.as_str());
    }

    /// Follow an OS color-scheme change unless the user has a persisted theme.
    ///
    /// Returns `true` if the active theme was updated.
    pub fn system_scheme_changed(&mut self, state: &mut PreferenceState, prefers_dark: bool) -> bool {
        if let Some(chosen) = self.load(STORAGE_THEME_KEY) {
            log::debug!("ignoring OS color-scheme change; user chose `{chosen}`");
            return false;
        }
        self.render_theme(state, Theme::from_prefers_dark(prefers_dark).as_str());
        true
    }

    fn render_language(&mut self, state: &mut PreferenceState, lang: &str) {
        state.language = Some(lang.to_owned());
        self.root.set_attribute(LANG_ATTRIBUTE, lang);
    }

    fn render_theme(&mut self, state: &mut PreferenceState, theme: &str) {
        state.theme = Some(theme.to_owned());
        self.root.set_attribute(THEME_ATTRIBUTE, theme);
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => non_empty(value),
            Err(e) => {
                log::warn!("failed to load `{key}` preference: {e}");
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::warn!("failed to save `{key}` preference: {e}");
        }
    }
}

/// Reactive handle shared through context.
#[derive(Clone, Copy)]
pub struct Preferences {
    state: RwSignal<PreferenceState>,
    controller: StoredValue<PreferenceController, LocalStorage>,
}

impl Preferences {
    /// Run startup on `controller` and wrap the result for components.
    pub fn start(mut controller: PreferenceController, system_prefers_dark: bool) -> Self {
        let state = controller.startup(system_prefers_dark);
        Self {
            state: RwSignal::new(state),
            controller: StoredValue::new_local(controller),
        }
    }

    /// Tracked read of the active preferences.
    pub fn get(&self) -> PreferenceState {
        self.state.get()
    }

    pub fn select_language(&self, lang: &str) {
        let state = self.state;
        self.controller
            .update_value(|c| state.update(|s| c.apply_language(s, lang)));
    }

    pub fn toggle_theme(&self) {
        let state = self.state;
        self.controller.update_value(|c| state.update(|s| c.toggle_theme(s)));
    }

    pub fn system_scheme_changed(&self, prefers_dark: bool) {
        let state = self.state;
        self.controller
            .update_value(|c| state.maybe_update(|s| c.system_scheme_changed(s, prefers_dark)));
    }
}
