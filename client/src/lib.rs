//! # client
//!
//! Leptos + WASM frontend for Poetry in the Woods.
//!
//! This crate contains the editor page, its components, reactive state, and
//! the browser bindings the share dispatcher runs against. Export and sharing
//! logic lives in the `canvas` crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Install the panic hook and console logger, then mount the app.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
