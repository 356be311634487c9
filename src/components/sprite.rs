//! Inline SVG icon sprite.
//!
//! External sprite references (`icons-sprite.svg#icon-x`) break on some
//! browsers and depend on page depth. Inlining the sprite once and
//! rewriting every `<use>` to `#icon-x` removes both problems.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "sprite_test.rs"]
mod sprite_test;

use crate::config::SiteConfig;
use crate::util::page::PageDepth;

/// Id of the hidden holder; its presence means the sprite is already inline.
pub const SENTINEL_ID: &str = "__svg-sprite";

/// Candidate sprite URLs for this page, in the order they are tried.
#[must_use]
pub fn candidates(config: &SiteConfig, depth: PageDepth) -> Vec<String> {
    config
        .sprite_candidates
        .iter()
        .map(|path| depth.resolve_asset(path))
        .collect()
}

/// Fetch the first available sprite, insert it hidden at the top of
/// `<body>`, and rewrite icon references to fragment-only form.
///
/// Abandons silently when no candidate responds.
pub async fn inline_sprite(config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        use crate::util::{dom, page::fragment_only};

        let Some(document) = dom::document() else {
            return;
        };
        if document.get_element_by_id(SENTINEL_ID).is_some() {
            return;
        }
        let urls = candidates(config, PageDepth::current());
        let Some((url, markup)) = crate::net::api::fetch_first_text(&urls).await else {
            log::debug!("no icon sprite available");
            return;
        };
        // Another pass may have inlined it while the fetch was in flight.
        if document.get_element_by_id(SENTINEL_ID).is_some() {
            return;
        }
        let (Some(body), Ok(holder)) = (document.body(), document.create_element("div")) else {
            return;
        };
        holder.set_id(SENTINEL_ID);
        let _ = holder.set_attribute("style", "display:none");
        let _ = holder.set_attribute("aria-hidden", "true");
        holder.set_inner_html(&markup);
        let _ = body.insert_before(&holder, body.first_child().as_ref());

        for glyph in dom::query_all(&document, "use") {
            if let Some(fragment) = dom::use_href(&glyph).as_deref().and_then(fragment_only) {
                dom::set_use_href(&glyph, fragment);
            }
        }
        log::debug!("inlined icon sprite from {url}");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
