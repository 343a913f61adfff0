//! Persistence
//!
//! Saves the todo list and theme into a string key-value store
//! (`window.localStorage` in the browser) and restores them at startup.
//! Nothing here surfaces errors to the user: failures are logged and the
//! defaults take over.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::models::{AppSnapshot, Todo};
use crate::theme::Theme;

pub const TODOS_KEY: &str = "todos";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("stored todos are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown theme `{value}`")]
    Theme { value: String },
}

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn new() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Session-only storage, used when `localStorage` is blocked and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load/save contract over any `KeyValueStore`
pub struct Persistence<S> {
    store: S,
    default_theme: Theme,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store, default_theme: Theme::default() }
    }

    /// Fallback for a missing or unknown stored theme
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    /// Last saved snapshot; any missing or unreadable entry falls back to its default.
    pub fn load(&self) -> AppSnapshot {
        let todos = self.read(TODOS_KEY, |raw| Ok(serde_json::from_str::<Vec<Todo>>(raw)?));
        let theme = self.read(THEME_KEY, |raw| raw.parse::<Theme>());
        let snapshot = AppSnapshot {
            todos: todos.unwrap_or_default(),
            theme: theme.unwrap_or(self.default_theme),
        };
        log::info!("loaded {} todos, theme {}", snapshot.todos.len(), snapshot.theme);
        snapshot
    }

    fn read<T>(&self, key: &str, parse: impl FnOnce(&str) -> Result<T, LoadError>) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("{}", e);
                return None;
            }
        };
        match parse(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring stored `{}`: {}", key, e);
                None
            }
        }
    }

    /// Write both entries. Failures are logged and dropped.
    pub fn save(&self, snapshot: &AppSnapshot) {
        match serde_json::to_string(&snapshot.todos) {
            Ok(json) => self.write(TODOS_KEY, &json),
            Err(e) => log::error!("failed to serialize todos: {}", e),
        }
        self.write(THEME_KEY, snapshot.theme.as_str());
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::error!("{}", e);
        }
    }
}
