//! Food Dashboard Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod logger;
mod models;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_env();
    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    log::info!("food service at {}", config.api.base_url);

    let api_config = config.api;
    mount_to_body(move || view! { <App api_config=api_config.clone() /> });
}
