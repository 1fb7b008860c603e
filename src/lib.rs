//! # auth-forms
//!
//! Leptos + WASM login and registration screens for a token-issuing auth API.
//!
//! The `form` module is the renderer-independent core: field rules, error
//! text, submit gating, and result handling. `pages` and `components` render
//! it, `net` talks to the API, and `state` holds the session token.

pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    let _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
