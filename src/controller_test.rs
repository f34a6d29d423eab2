use super::*;
use crate::util::document::DetachedRoot;
use crate::util::storage::{MemoryStore, StorageError};

/// Backend that rejects every access, like blocked `localStorage`.
struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend {
            op: "write",
            key: key.to_owned(),
            message: "SecurityError".to_owned(),
        })
    }
}

fn controller_with(store: MemoryStore) -> PreferenceController {
    PreferenceController::new(Box::new(store), Box::new(DetachedRoot::new()))
}

fn fresh() -> PreferenceController {
    controller_with(MemoryStore::new())
}

fn failing() -> PreferenceController {
    PreferenceController::new(Box::new(FailingStore), Box::new(DetachedRoot::new()))
}

fn stored(c: &PreferenceController, key: &str) -> Option<String> {
    c.store().get(key).unwrap()
}

fn lang_attr(c: &PreferenceController) -> Option<String> {
    c.root().attribute("lang")
}

fn theme_attr(c: &PreferenceController) -> Option<String> {
    c.root().attribute("data-theme")
}

// =============================================================
// apply_language
// =============================================================

#[test]
fn apply_language_sets_root_attribute_and_state() {
    for lang in ["en", "ru", "de", ""] {
        let mut c = fresh();
        let mut state = PreferenceState::default();
        c.apply_language(&mut state, lang);
        assert_eq!(lang_attr(&c).as_deref(), Some(lang));
        assert_eq!(state.language.as_deref(), Some(lang));
    }
}

#[test]
fn apply_language_persists_choice() {
    let mut c = fresh();
    let mut state = PreferenceState::default();
    c.apply_language(&mut state, "ru");
    assert_eq!(stored(&c, "cv-language").as_deref(), Some("ru"));
}

#[test]
fn apply_language_activates_exactly_one_language() {
    let mut c = fresh();
    let mut state = PreferenceState::default();
    c.apply_language(&mut state, "en");
    c.apply_language(&mut state, "ru");
    assert!(state.is_language_active("ru"));
    assert!(!state.is_language_active("en"));
}

#[test]
fn apply_language_is_idempotent() {
    let mut c = fresh();
    let mut state = PreferenceState::default();
    c.apply_language(&mut state, "ru");
    let once = state.clone();
    c.apply_language(&mut state, "ru");
    assert_eq!(state, once);
    assert_eq!(lang_attr(&c).as_deref(), Some("ru"));
}

// =============================================================
// apply_theme / toggle_theme
// =============================================================

#[test]
fn apply_theme_sets_marker_and_glyph() {
    let mut c = fresh();
    let mut state = PreferenceState::default();

    c.apply_theme(&mut state, "dark");
    assert_eq!(theme_attr(&c).as_deref(), Some("dark"));
    assert_eq!(state.theme_glyph(), "☀️");

    c.apply_theme(&mut state, "light");
    assert_eq!(theme_attr(&c).as_deref(), Some("light"));
    assert_eq!(state.theme_glyph(), "🌙");
}

#[test]
fn apply_theme_persists_choice() {
    let mut c = fresh();
    let mut state = PreferenceState::default();
    c.apply_theme(&mut state, "dark");
    assert_eq!(stored(&c, "cv-theme").as_deref(), Some("dark"));
}

#[test]
fn apply_theme_accepts_unknown_marker() {
    let mut c = fresh();
    let mut state = PreferenceState::default();
    c.apply_theme(&mut state, "sepia");
    assert_eq!(theme_attr(&c).as_deref(), Some("sepia"));
    assert_eq!(state.theme_glyph(), "🌙");
}

#[test]
fn toggle_from_unset_goes_dark() {
    let mut c = fresh();
    let mut state = PreferenceState::default();
    c.toggle_theme(&mut state);
    assert_eq!(theme_attr(&c).as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_restores_theme() {
    for start in ["light", "dark"] {
        let mut c = fresh();
        let mut state = PreferenceState::default();
        c.apply_theme(&mut state, start);
        c.toggle_theme(&mut state);
        assert_ne!(state.theme.as_deref(), Some(start));
        c.toggle_theme(&mut state);
        assert_eq!(state.theme.as_deref(), Some(start));
        assert_eq!(theme_attr(&c).as_deref(), Some(start));
    }
}

#[test]
fn toggle_reads_theme_marker_from_document_root() {
    let mut root = DetachedRoot::new();
    root.set_attribute("data-theme", "dark");
    let mut c = PreferenceController::new(Box::new(MemoryStore::new()), Box::new(root));
    let mut state = PreferenceState::default();
    c.toggle_theme(&mut state);
    assert_eq!(theme_attr(&c).as_deref(), Some("light"));
    assert_eq!(state.theme.as_deref(), Some("light"));
}

#[test]
fn toggle_from_unknown_marker_goes_light() {
    let mut c = fresh();
    let mut state = PreferenceState::default();
    c.apply_theme(&mut state, "sepia");
    c.toggle_theme(&mut state);
    assert_eq!(state.theme.as_deref(), Some("light"));
    assert_eq!(stored(&c, "cv-theme").as_deref(), Some("light"));
}

// =============================================================
// Startup
// =============================================================

#[test]
fn startup_defaults_to_english_and_os_theme() {
    let mut c = fresh();
    let state = c.startup(true);
    assert_eq!(state.language.as_deref(), Some("en"));
    assert_eq!(state.theme.as_deref(), Some("dark"));
    assert_eq!(lang_attr(&c).as_deref(), Some("en"));
    assert_eq!(theme_attr(&c).as_deref(), Some("dark"));
}

#[test]
fn startup_persists_resolved_language() {
    let mut c = fresh();
    c.startup(true);
    assert_eq!(stored(&c, "cv-language").as_deref(), Some("en"));
}

#[test]
fn startup_does_not_persist_os_theme_fallback() {
    let mut c = fresh();
    c.startup(true);
    assert_eq!(stored(&c, "cv-theme"), None);
}

#[test]
fn startup_prefers_persisted_values_over_defaults() {
    let mut c = controller_with(MemoryStore::with_entries([("cv-language", "ru"), ("cv-theme", "light")]));
    let state = c.startup(true);
    assert_eq!(state.language.as_deref(), Some("ru"));
    assert_eq!(state.theme.as_deref(), Some("light"));
}

#[test]
fn startup_applies_unknown_persisted_theme_verbatim() {
    let mut c = controller_with(MemoryStore::with_entries([("cv-theme", "sepia")]));
    let state = c.startup(true);
    assert_eq!(state.theme.as_deref(), Some("sepia"));
}

#[test]
fn startup_treats_empty_values_as_absent() {
    let mut c = controller_with(MemoryStore::with_entries([("cv-language", ""), ("cv-theme", "")]));
    let state = c.startup(true);
    assert_eq!(state.language.as_deref(), Some("en"));
    assert_eq!(state.theme.as_deref(), Some("dark"));
}

// =============================================================
// OS color-scheme changes
// =============================================================

#[test]
fn os_change_followed_while_nothing_persisted() {
    let mut c = fresh();
    let mut state = c.startup(false);
    assert!(c.system_scheme_changed(&mut state, true));
    assert_eq!(theme_attr(&c).as_deref(), Some("dark"));
    assert!(c.system_scheme_changed(&mut state, false));
    assert_eq!(theme_attr(&c).as_deref(), Some("light"));
    assert_eq!(stored(&c, "cv-theme"), None);
}

#[test]
fn os_change_ignored_once_theme_persisted() {
    let mut c = fresh();
    let mut state = c.startup(false);
    c.apply_theme(&mut state, "light");
    assert!(!c.system_scheme_changed(&mut state, true));
    assert_eq!(state.theme.as_deref(), Some("light"));
    assert_eq!(theme_attr(&c).as_deref(), Some("light"));
}

#[test]
fn os_change_ignored_for_theme_persisted_in_earlier_session() {
    let mut c = controller_with(MemoryStore::with_entries([("cv-theme", "dark")]));
    let mut state = c.startup(false);
    assert!(!c.system_scheme_changed(&mut state, false));
    assert_eq!(state.theme.as_deref(), Some("dark"));
}

// =============================================================
// Degraded storage
// =============================================================

#[test]
fn failing_storage_still_updates_presentation() {
    let mut c = failing();
    let mut state = PreferenceState::default();
    c.apply_language(&mut state, "ru");
    c.apply_theme(&mut state, "dark");
    assert_eq!(lang_attr(&c).as_deref(), Some("ru"));
    assert_eq!(theme_attr(&c).as_deref(), Some("dark"));
    c.toggle_theme(&mut state);
    assert_eq!(theme_attr(&c).as_deref(), Some("light"));
}

#[test]
fn failing_storage_startup_uses_defaults() {
    let mut c = failing();
    let state = c.startup(true);
    assert_eq!(state.language.as_deref(), Some("en"));
    assert_eq!(state.theme.as_deref(), Some("dark"));
}

#[test]
fn failing_storage_follows_os_changes() {
    let mut c = failing();
    let mut state = c.startup(false);
    assert!(c.system_scheme_changed(&mut state, true));
    assert_eq!(state.theme.as_deref(), Some("dark"));
}

// =============================================================
// End-to-end session
// =============================================================

#[test]
fn fresh_session_walkthrough() {
    let mut c = fresh();

    let mut state = c.startup(true);
    assert_eq!(theme_attr(&c).as_deref(), Some("dark"));
    assert_eq!(lang_attr(&c).as_deref(), Some("en"));

    c.apply_language(&mut state, "ru");
    assert_eq!(lang_attr(&c).as_deref(), Some("ru"));
    assert_eq!(stored(&c, "cv-language").as_deref(), Some("ru"));

    c.toggle_theme(&mut state);
    assert_eq!(theme_attr(&c).as_deref(), Some("light"));
    assert_eq!(stored(&c, "cv-theme").as_deref(), Some("light"));

    assert!(!c.system_scheme_changed(&mut state, true));
    assert_eq!(theme_attr(&c).as_deref(), Some("light"));
}
