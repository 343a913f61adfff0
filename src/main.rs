//! Todo Frontend Entry Point

mod models;
mod theme;
mod todos;
mod persistence;
mod store;
mod config;
mod logger;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::default();
    logger::init(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
