//! Photo Gallery Frontend Entry Point

mod models;
mod error;
mod config;
mod filter;
mod layout;
mod lightbox;
mod manifest;
mod store;
mod context;
mod dom;
mod offline;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("[Main] Logger init failed: {}", e).into());
    }
    dom::expose_log_dump("galleryLogs");
    mount_to_body(App);
}
