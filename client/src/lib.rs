//! # client
//!
//! Leptos + WASM frontend for the `AdoptoCare` pet adoption portal.
//!
//! Session and notification semantics live in the `adoptocare` crate; this
//! crate binds them to the browser (`localStorage`, `storage` events, timers)
//! and renders the pages and chrome on top.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
