//! Page header: profile, navigation, and preference controls.

use leptos::prelude::*;

use crate::components::current_date::CurrentDate;
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::menu::Menu;
use crate::components::profile_info::ProfileInfo;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <ProfileInfo/>
            <Menu/>
            <div class="header__controls">
                <CurrentDate/>
                <LanguageSwitcher/>
                <ThemeToggle/>
            </div>
        </header>
    }
}
