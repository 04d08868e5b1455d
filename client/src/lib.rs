//! # blog-client
//!
//! Leptos + WASM single-page front-end for the blog.
//!
//! This crate contains the REST API client, the session and theme stores,
//! the static route table with its navigation policy, and the thin page
//! views that drive them. Everything network-facing sits behind the
//! `net::transport::Transport` seam so stores can be exercised natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: installs logging and the panic hook, then mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
