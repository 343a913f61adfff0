//! New Todo Form Component
//!
//! Input row: Enter adds an active todo, ticking the checkbox adds a
//! completed one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::use_config;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    let (new_text, set_new_text) = signal(String::new());
    // Ticked for a moment after a checkbox add
    let (flash, set_flash) = signal(false);

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        store.todos().write().add(&text);
        set_new_text.set(String::new());
    };

    let on_check = move |ev: web_sys::Event| {
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            // Nothing to add; undo the browser's own tick
            event_target::<web_sys::HtmlInputElement>(&ev).set_checked(false);
            return;
        }
        set_flash.set(true);
        store.todos().write().add_completed(&text);
        set_new_text.set(String::new());

        let delay = config.check_flash_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            set_flash.set(false);
        });
    };

    view! {
        <div class="new-todo-row">
            <input
                type="checkbox"
                class="circle-checkbox"
                prop:checked=move || flash.get()
                on:change=on_check
            />
            <input
                type="text"
                class="new-todo-input"
                placeholder="Create a new todo"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}
