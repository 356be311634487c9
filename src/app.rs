//! Boot sequence shared by every page.
//!
//! Structural setup runs first (fragments, then sprite) because the nav
//! toggle, footer year, and icon references live in injected markup. The
//! remaining components are independent of one another.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::components::projects::ProjectList;
use crate::components::{contact, cv, footer, fragments, nav, normalizer, reveal, sprite};
use crate::config::SiteConfig;
use crate::util::page::PageDepth;
use crate::util::theme;

/// Run every enhancement against the current document.
pub async fn boot(config: SiteConfig) {
    let depth = PageDepth::current();
    log::debug!("booting at {depth:?} depth");

    normalizer::normalize_paths(depth);
    fragments::load_includes().await;
    footer::stamp_year();
    sprite::inline_sprite(&config).await;
    normalizer::schedule_normalize(depth);

    theme::init(&config);
    nav::init(&config);
    spawn_render(ProjectList::Featured, &config);
    spawn_render(ProjectList::FullList, &config);
    reveal::init(&config);

    contact::init(&config);
    cv::init(&config);
}

fn spawn_render(list: ProjectList, config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        wasm_bindgen_futures::spawn_local(async move {
            crate::components::projects::render(list, &config).await;
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (list, config);
    }
}

/// Wait for `DOMContentLoaded` when the document is still parsing, then boot.
#[cfg(feature = "csr")]
pub fn run_when_ready(config: SiteConfig) {
    let Some(document) = crate::util::dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        gloo_events::EventListener::once(&document, "DOMContentLoaded", move |_| {
            wasm_bindgen_futures::spawn_local(boot(config));
        })
        .forget();
    } else {
        wasm_bindgen_futures::spawn_local(boot(config));
    }
}
