//! # glimpser-ui
//!
//! Leptos + WASM dashboard for a camera monitoring server. Renders a
//! paginated, filterable gallery of camera templates with hover and
//! visibility driven video previews, a server health panel and a live log
//! viewer.
//!
//! The gallery core (`gallery`, `state::template_store`, `util::playback`)
//! is platform-neutral and tested natively; browser bindings are compiled
//! only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod gallery;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

/// WASM entry point: install the panic hook and logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already initialised: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
