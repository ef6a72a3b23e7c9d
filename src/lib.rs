//! # biblo-web
//!
//! Leptos + WASM client for the Biblo study-matching service.
//!
//! This crate contains the route table and its auth guard, the session slot
//! the guard consults, API configuration, and the page shells mounted by the
//! root `App` component. Browser glue is compiled in with the `csr` feature;
//! without it the crate builds natively so routing can be tested directly.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
