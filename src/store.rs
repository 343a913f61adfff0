//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::AppSnapshot;
use crate::persistence::{KeyValueStore, Persistence};
use crate::theme::Theme;
use crate::todos::TodoList;

/// Persisted application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos in display order
    pub todos: TodoList,
    /// Active color scheme
    pub theme: Theme,
}

impl AppState {
    pub fn from_snapshot(snapshot: AppSnapshot) -> Self {
        Self {
            todos: TodoList::from_persisted(snapshot.todos),
            theme: snapshot.theme,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Current snapshot, tracking both fields so an effect reruns when either changes
pub fn tracked_snapshot(store: &AppStore) -> AppSnapshot {
    AppSnapshot {
        todos: store.todos().with(|list| list.as_slice().to_vec()),
        theme: store.theme().get(),
    }
}

/// Write the full snapshot whenever todos or theme change (and once on start)
pub fn autosave<S: KeyValueStore + 'static>(store: AppStore, persistence: Persistence<S>) {
    Effect::new(move |_| {
        let snapshot = tracked_snapshot(&store);
        persistence.save(&snapshot);
    });
}
