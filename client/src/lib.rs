//! # admin-client
//!
//! Leptos + WASM frontend for the institution's administrative console.
//!
//! This crate owns the session gate shared by every screen: the persisted
//! session store, the auth state provider, the authenticated request gateway,
//! and the route access guard. Content screens consume these through context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
