//! Page footer with the copyright line.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::components::use_active_profile;
use crate::util::current_date::today;

#[component]
pub fn Footer() -> impl IntoView {
    let active = use_active_profile();
    let year = today().map(|d| d.year);

    view! {
        <footer class="footer">
            <p class="footer__copyright">
                {move || active().map(|p| copyright_line(year, &p.name))}
            </p>
        </footer>
    }
}

pub fn copyright_line(year: Option<i32>, name: &str) -> String {
    match year {
        Some(year) => format!("© {year} {name}"),
        None => format!("© {name}"),
    }
}
