//! Header Component
//!
//! Page title and the light/dark toggle.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::theme::Theme;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    let toggle_theme = move |_| {
        store.theme().write().toggle();
        log::debug!("theme switched to {}", store.theme().get_untracked());
    };

    view! {
        <div class="header">
            <h1 class="header-text">"TODO"</h1>
            <button
                class="toggle-btn"
                title=move || if store.theme().get() == Theme::Dark { "Light mode" } else { "Dark mode" }
                on:click=toggle_theme
            >
                // Show the mode the button switches to
                {move || if store.theme().get() == Theme::Dark { "☀" } else { "☾" }}
            </button>
        </div>
    }
}
