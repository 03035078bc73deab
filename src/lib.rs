//! # job-board
//!
//! Leptos + WASM job-listing widget. Fetches a static list of postings,
//! renders them as cards, filters them by title and department, and shows a
//! detail modal with an apply link. A theme toggle persists light/dark mode.
//!
//! All browser glue is gated behind the `csr` feature. Without it the crate
//! builds natively and the state machine in [`state`] is testable directly.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod render;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount
/// the widget onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::WidgetConfig::from_document();
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
