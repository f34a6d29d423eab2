//! Root application component.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::resume::Resume;
use crate::components::use_active_profile;
use crate::content::{Profile, SiteContent};
use crate::controller::{PreferenceController, Preferences};
use crate::util::color_scheme;

/// Root application component.
///
/// Resolves the initial preferences before anything is rendered, then
/// subscribes to OS color-scheme changes and provides shared context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = StoredValue::new(SiteContent::load());
    let prefs = Preferences::start(PreferenceController::for_environment(), color_scheme::prefers_dark());
    color_scheme::watch(move |prefers_dark| prefs.system_scheme_changed(prefers_dark));

    provide_context(content);
    provide_context(prefs);

    let active = use_active_profile();
    let title = move || page_title(active().as_ref());
    let description = move || active().map(|p| p.summary).unwrap_or_default();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
        <Header/>
        <Resume/>
        <Footer/>
    }
}

/// Document title for the active profile.
pub fn page_title(profile: Option<&Profile>) -> String {
    match profile {
        Some(p) if p.title.is_empty() => p.name.clone(),
        Some(p) => format!("{} | {}", p.name, p.title),
        None => "CV".to_owned(),
    }
}
