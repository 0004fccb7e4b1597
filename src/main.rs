//! Todo App Frontend Entry Point

mod account;
mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod routes;
mod store;
mod todos;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("logger already initialized");
    }

    mount_to_body(App);
}
