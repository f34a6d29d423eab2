//! Today's date, formatted for the active language.

use leptos::prelude::*;

use crate::config::DEFAULT_LANGUAGE;
use crate::controller::Preferences;
use crate::util::current_date::{format_date, today};

#[component]
pub fn CurrentDate() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let date = today();

    view! {
        <time class="current-date">
            {move || {
                let lang = prefs.get().language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned());
                date.map(|d| format_date(d, &lang))
            }}
        </time>
    }
}
