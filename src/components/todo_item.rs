//! Todo Item Component
//!
//! A single draggable row in the list.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::models::Todo;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single todo row
#[component]
pub fn TodoItem(todo: Todo, drag: DragSignals<u64>) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let text_class = if completed { "todo-text completed" } else { "todo-text" };

    let on_drop = move |source: u64, target: u64| {
        store.todos().write().reorder(source, target);
    };

    let row_class = move || {
        let state = drag.state.get();
        let mut c = String::from("todo-row");
        if state.is_source(id) { c.push_str(" dragging"); }
        if state.is_hover_target(id) { c.push_str(" drag-over"); }
        c
    };

    view! {
        <div
            class=row_class
            draggable="true"
            on:dragstart=make_on_dragstart(drag, id)
            on:dragover=make_on_dragover(drag, id)
            on:drop=make_on_drop(drag, id, on_drop)
            on:dragend=make_on_dragend(drag)
        >
            <div class="todo-main">
                <input
                    type="checkbox"
                    class="circle-checkbox"
                    prop:checked=completed
                    on:change=move |_| store.todos().write().toggle(id)
                />
                <span class=text_class>
                    {todo.text}
                </span>
            </div>
            <button class="delete-btn" on:click=move |_| store.todos().write().delete(id)>"×"</button>
        </div>
    }
}
