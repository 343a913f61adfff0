//! Frontend Models
//!
//! Data structures shared by the store, persistence and view.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// A single task. `id` is the creation timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// List projection used by the footer buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Placeholder shown when the projection is empty
    pub fn empty_message(self) -> &'static str {
        match self {
            Filter::All => "No tasks found",
            Filter::Active => "No active tasks found",
            Filter::Completed => "No completed tasks found",
        }
    }
}

/// Everything that survives a reload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSnapshot {
    pub todos: Vec<Todo>,
    pub theme: Theme,
}
