//! # client
//!
//! Leptos + WASM host for the VendorHub session layer.
//!
//! The root [`app::App`] builds one `SessionController` backed by
//! `localStorage`, provides it through context, and mounts the role-gated
//! dashboard routes behind [`components::protected_route::ProtectedRoute`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
