//! # podcastai-client
//!
//! Leptos + WASM frontend for the PodcastAI marketing page.
//!
//! The crate renders the landing page (navigation, hero, features, pricing,
//! footer), mirrors the hosted auth provider's session into reactive state,
//! and persists the light/dark theme preference. The `ssr` feature is used by
//! the host server for server rendering; `hydrate` builds the browser bundle.

pub mod app;
pub mod auth;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
