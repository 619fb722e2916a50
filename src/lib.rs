//! # modqueue-ui
//!
//! Leptos + WASM frontend shell for a moderation-admin application.
//!
//! This crate contains the page chrome (sidebar, mobile drawer, search bar,
//! profile menu), the subject moderation queue table with URL-driven sort
//! state and load-more pagination, and the shared client-side state behind
//! both. All persistence and moderation decisions live in the backend; this
//! crate only renders what the API hands it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
