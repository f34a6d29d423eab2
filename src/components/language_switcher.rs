//! Language selector buttons.

use leptos::prelude::*;

use crate::content::{LanguageOption, SiteContent};
use crate::controller::Preferences;
use crate::state::prefs::language_button_class;

/// One button per configured language; the active one is highlighted.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let content = expect_context::<StoredValue<SiteContent>>();
    let options = content.with_value(|c| c.languages.clone());

    view! {
        <div class="language-switcher">
            {options
                .into_iter()
                .map(|LanguageOption { code, label }| {
                    let for_class = code.clone();
                    let for_click = code.clone();
                    view! {
                        <button
                            type="button"
                            class=move || language_button_class(prefs.get().is_language_active(&for_class))
                            data-lang=code
                            on:click=move |_| prefs.select_language(&for_click)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
