//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod new_todo_form;
mod todo_item;
mod todo_list_view;
mod footer;

pub use header::Header;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
pub use footer::Footer;
