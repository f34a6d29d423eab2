//! Site shell components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read [`Preferences`] and [`SiteContent`] from Leptos context and
//! render the language-tagged résumé plus the controls that change it.

pub mod current_date;
pub mod footer;
pub mod header;
pub mod language_switcher;
pub mod menu;
pub mod profile_info;
pub mod resume;
pub mod theme_toggle;

use leptos::prelude::*;

use crate::content::{Profile, SiteContent};
use crate::controller::Preferences;

/// Tracked accessor for the profile matching the active language.
pub(crate) fn use_active_profile() -> impl Fn() -> Option<Profile> + Copy + Send + Sync + 'static {
    let prefs = expect_context::<Preferences>();
    let content = expect_context::<StoredValue<SiteContent>>();
    move || {
        let language = prefs.get().language;
        content.with_value(|c| c.profile_for(language.as_deref()).cloned())
    }
}
