//! Language-tagged résumé regions.
//!
//! Every profile is rendered up front; only the region whose `data-lang`
//! matches the active language carries `resume--active`.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use leptos::prelude::*;

use crate::content::{Entry, Profile, Section, SiteContent};
use crate::controller::Preferences;
use crate::state::prefs::resume_class;

#[component]
pub fn Resume() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let content = expect_context::<StoredValue<SiteContent>>();
    let profiles = content.with_value(|c| c.profiles.clone());

    view! {
        <main class="resumes">
            {profiles
                .into_iter()
                .map(|profile| {
                    let lang = profile.lang.clone();
                    let data_lang = profile.lang.clone();
                    let lang_attr = profile.lang.clone();
                    view! {
                        <section
                            class=move || resume_class(prefs.get().is_language_active(&lang))
                            data-lang=data_lang
                            lang=lang_attr
                        >
                            <ProfileBody profile=profile/>
                        </section>
                    }
                })
                .collect_view()}
        </main>
    }
}

#[component]
fn ProfileBody(profile: Profile) -> impl IntoView {
    let Profile { lang, summary, sections, .. } = profile;
    view! {
        <p class="resume__summary">{summary}</p>
        {sections
            .into_iter()
            .map(|section| view! { <ResumeSection lang=lang.clone() section=section/> })
            .collect_view()}
    }
}

#[component]
fn ResumeSection(lang: String, section: Section) -> impl IntoView {
    let anchor = section_anchor(&lang, &section.id);
    view! {
        <section class="resume__section" id=anchor>
            <h2 class="resume__heading">{section.heading}</h2>
            {section.entries.into_iter().map(|entry| view! { <ResumeEntry entry=entry/> }).collect_view()}
        </section>
    }
}

#[component]
fn ResumeEntry(entry: Entry) -> impl IntoView {
    let Entry { title, subtitle, period, details } = entry;
    view! {
        <article class="resume__entry">
            <h3 class="resume__entry-title">{title}</h3>
            {(!subtitle.is_empty()).then(|| view! { <span class="resume__entry-subtitle">{subtitle}</span> })}
            {(!period.is_empty()).then(|| view! { <span class="resume__entry-period">{period}</span> })}
            {(!details.is_empty())
                .then(|| {
                    view! {
                        <ul class="resume__entry-details">
                            {details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                        </ul>
                    }
                })}
        </article>
    }
}

/// Element id of a résumé section. Prefixed by language so both regions can
/// live in the same document.
pub fn section_anchor(lang: &str, section_id: &str) -> String {
    format!("{lang}-{section_id}")
}
