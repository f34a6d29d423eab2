//! In-page navigation to the active résumé's sections.

use leptos::prelude::*;

use crate::components::resume::section_anchor;
use crate::components::use_active_profile;

#[component]
pub fn Menu() -> impl IntoView {
    let active = use_active_profile();

    view! {
        <nav class="menu">
            <ul class="menu__list">
                {move || {
                    active()
                        .map(|profile| {
                            let lang = profile.lang;
                            profile
                                .sections
                                .into_iter()
                                .map(|section| {
                                    let href = format!("#{}", section_anchor(&lang, &section.id));
                                    view! {
                                        <li class="menu__item">
                                            <a class="menu__link" href=href>{section.heading}</a>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </ul>
        </nav>
    }
}
