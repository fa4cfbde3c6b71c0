//! # client
//!
//! Leptos + WASM storefront UI: product catalog, cart, simulated checkout, and
//! the floating shopping assistant (streaming chat plus voice handshake).
//!
//! Pure logic (catalog, stores, the chat stream assembler) builds and tests
//! natively with no features. `hydrate` adds the browser networking and the
//! WASM entry point; `ssr` lets the server render the same components.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
