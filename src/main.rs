//! Timer Board Frontend Entry Point

mod models;
mod storage;
mod reducer;
mod store;
mod config;
mod format;
mod context;
mod ui_store;
mod ticker;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::default();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    mount_to_body(move || view! { <App config=config.clone() /> });
}
