//! Todo App
//!
//! Root component: restores state, wires persistence and theme effects.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Footer, Header, NewTodoForm, TodoListView};
use crate::config::AppConfig;
use crate::models::Filter;
use crate::persistence::{KeyValueStore, LocalStorage, MemoryStorage, Persistence};
use crate::store::{autosave, AppState, AppStateStoreFields};

/// Browser storage, or a session-only map when it is blocked
fn open_storage() -> Box<dyn KeyValueStore> {
    match LocalStorage::new() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}, changes will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let persistence = Persistence::new(open_storage()).with_default_theme(config.default_theme);
    let store = Store::new(AppState::from_snapshot(persistence.load()));
    let (filter, set_filter) = signal(Filter::All);

    provide_context(config);
    provide_context(store);

    // Switch rendering mode immediately on every theme change
    Effect::new(move |_| store.theme().get().apply());

    autosave(store, persistence);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <Header />
                <NewTodoForm />
                <TodoListView filter=filter />
                <Footer filter=filter set_filter=set_filter />
                <span class="drag-text">"Drag and drop to reorder list"</span>
            </main>
        </div>
    }
}
