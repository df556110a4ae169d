//! Property Search Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod dnd;
mod favorites;
mod filter;
mod floor_plan;
mod format;
mod models;
mod security;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Some(level) = config::AppConfig::from_build_env().log_level.to_level() {
        _ = console_log::init_with_level(level);
    }
    mount_to_body(App);
}
