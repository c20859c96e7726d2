//! # portfolio-client
//!
//! Leptos + WASM frontend for the personal portfolio page.
//!
//! The page is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). It renders the project catalog, restores and persists the
//! light/dark theme preference, and posts the contact form to an external
//! form collector with inline status feedback.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod net;
pub mod render;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) fails harmlessly.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
