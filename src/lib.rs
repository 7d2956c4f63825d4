//! # userinfo-client
//!
//! Leptos + WASM front end that shows the signed-in user's username and
//! email, fetched from an identity provider's userinfo endpoint.
//!
//! This crate contains pages, components, application state, and the
//! identity-provider client boundary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
