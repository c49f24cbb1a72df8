//! # meridian-client
//!
//! Leptos + WASM frontend shell for the Meridian portal.
//!
//! This crate is the root of the single-page client: it resolves the
//! authentication session exactly once at mount, holds the static route
//! table, and dispatches the current URL to page components through a
//! per-route access check. Page content, chrome, and the identity backend
//! are deliberately thin; the decision logic lives in [`routing`] and
//! [`state::session`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("failed to init console logging");

    leptos::mount::hydrate_body(app::App);
}
