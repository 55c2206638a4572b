//! Verdant storefront.
//!
//! Client-side rendered Leptos application. Platform-neutral behaviour lives
//! in `verdant-client`; this crate wires it to the browser:
//! - window resize events and `navigator.userAgent` for device classification
//! - `setTimeout` and `spawn_local` for the search debounce and lookups
//! - `localStorage` for recent searches
//! - the router for listing-page navigation

mod app;
mod catalog;
mod components;
mod device;
mod logging;
mod pages;
mod runtime;
mod state;

pub use app::{load_config, App};

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = load_config();
    if let Err(e) = verdant_client::logging::init_logging(&config.logging, logging::ConsoleMakeWriter) {
        leptos::logging::warn!("{e}");
    }
    tracing::info!(retention = ?config.layout.retention, "starting storefront");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
