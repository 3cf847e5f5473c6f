//! # client
//!
//! Leptos + WASM frontend for the component directory. Pages, views, and
//! application state live here; URL dispatch goes through the `routing`
//! crate and package data comes from the `registry` model shared with the
//! server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
