//! Todo List View Component
//!
//! Filtered list of rows with drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::create_drag_signal;

use crate::components::TodoItem;
use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView(filter: ReadSignal<Filter>) -> impl IntoView {
    let store = use_app_store();

    // Transient, never persisted
    let drag = create_drag_signal::<u64>();

    let visible = move || store.todos().with(|list| list.filtered(filter.get()));

    view! {
        <div class="todo-list">
            <Show
                when=move || !visible().is_empty()
                fallback=move || view! { <div class="no-todos">{move || filter.get().empty_message()}</div> }
            >
                <For
                    each=visible
                    // Include mutable fields so a toggle re-renders the row
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| view! { <TodoItem todo=todo drag=drag /> }
                />
            </Show>
        </div>
    }
}
