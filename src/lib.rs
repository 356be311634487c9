//! # folio-client
//!
//! WASM enhancement layer for a static multi-page portfolio site.
//!
//! Pages ship as plain HTML. This crate splices in the shared header and
//! footer, inlines the icon sprite, fixes relative paths for pages under
//! `projects/`, and then wires the theme toggle, mobile navigation, project
//! cards, scroll reveal, contact form, and CV download.
//!
//! Browser glue is gated behind the `csr` feature; without it every entry
//! point is a no-op and the pure logic is testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let (config, override_error) = config::SiteConfig::load();
    let _ = console_log::init_with_level(config.log_level());
    if let Some(e) = override_error {
        log::warn!("ignoring invalid #{} override: {e}", config::CONFIG_ELEMENT_ID);
    }
    app::run_when_ready(config);
}
