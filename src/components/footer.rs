//! Footer Component
//!
//! Remaining count, filter selector and clear-completed.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer(filter: ReadSignal<Filter>, set_filter: WriteSignal<Filter>) -> impl IntoView {
    let store = use_app_store();

    let remaining = move || store.todos().with(|list| list.remaining_count());
    // Squared-off footer when at most one row sits above it
    let footer_class = move || {
        let visible = store.todos().with(|list| list.count(filter.get()));
        if visible <= 1 { "footer notask" } else { "footer" }
    };

    view! {
        <div class=footer_class>
            <span>{move || format!("{} items left", remaining())}</span>
            <div class="filter-buttons">
                {Filter::ALL.iter().map(|&f| view! {
                    <button
                        class=move || if filter.get() == f { "active" } else { "" }
                        on:click=move |_| set_filter.set(f)
                    >
                        {f.label()}
                    </button>
                }).collect_view()}
            </div>
            <button
                class="clear-btn"
                on:click=move |_| store.todos().write().clear_completed()
            >
                "Clear Completed"
            </button>
        </div>
    }
}
