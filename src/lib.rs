//! # bookstand
//!
//! Leptos + WASM admin front-end for a bookstore catalog API.
//!
//! All persistence and business rules live in the remote REST API; this
//! crate handles routing, authentication state, form validation, and
//! rendering of server-paginated collections. Browser-only behavior
//! (HTTP, localStorage, timers, downloads) is gated behind the `hydrate`
//! feature so the crate compiles and unit-tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the host page after the bundle loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
