//! Application Configuration
//!
//! Build-time defaults, provided to components via context.

use leptos::prelude::*;
use log::LevelFilter;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Theme used when nothing (or garbage) is stored
    pub default_theme: Theme,
    /// How long the input-row checkbox stays ticked after a quick add
    pub check_flash_ms: u32,
    /// Console log threshold
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Dark,
            check_flash_ms: 300,
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
