//! Name, title and contact line of the active profile.

use leptos::prelude::*;

use crate::components::use_active_profile;

#[component]
pub fn ProfileInfo() -> impl IntoView {
    let active = use_active_profile();

    view! {
        <div class="profile-info">
            {move || {
                active()
                    .map(|p| {
                        let mailto = format!("mailto:{}", p.email);
                        view! {
                            <h1 class="profile-info__name">{p.name}</h1>
                            <p class="profile-info__title">{p.title}</p>
                            <p class="profile-info__contacts">
                                <span class="profile-info__location">{p.location}</span>
                                <a class="profile-info__email" href=mailto>{p.email}</a>
                            </p>
                        }
                    })
            }}
        </div>
    }
}
