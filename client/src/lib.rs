//! Account portal UI.
//!
//! ARCHITECTURE
//! ============
//! - `state`: the session store (pure reducer), its operations and toasts.
//! - `net`: wire types and the HTTP seam to the user API.
//! - `util`: cookie persistence, form validation, the route-guard decision.
//! - `components` / `pages`: Leptos views that read the session from context
//!   and call into `state::actions`.
//!
//! Built with `ssr` for the host binary and with `hydrate` for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
