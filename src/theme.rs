//! Theme Preference
//!
//! Light/dark selection and its application to the document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::persistence::LoadError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    /// Switch the page rendering mode (`<html data-theme="...">`)
    pub fn apply(self) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            log::warn!("no document element, theme {} not applied", self);
            return;
        };
        if let Err(e) = root.set_attribute("data-theme", self.as_str()) {
            log::error!("failed to set data-theme: {:?}", e);
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(LoadError::Theme { value: other.to_string() }),
        }
    }
}
