//! Shared header/footer fragment injection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages declare `<div data-include="header"></div>` placeholders. Each one
//! is fetched and replaced in place by the fragment markup. Navigation
//! buttons and the footer year live inside these fragments, so anything that
//! binds to them runs after [`load_includes`] resolves.
//!
//! ERROR HANDLING
//! ==============
//! Placeholders are independent. A failed fetch leaves its placeholder in
//! the page and logs a warning; the other replacements still happen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

use crate::util::page::PageDepth;

pub const INCLUDE_ATTR: &str = "data-include";
pub const HEADER_PATH: &str = "_includes/header.html";
pub const FOOTER_PATH: &str = "_includes/footer.html";

/// Map a placeholder value to the document path to fetch.
///
/// `header` and `footer` are shorthands rooted at the site root and follow
/// page depth; anything else is an explicit path used verbatim.
#[must_use]
pub fn resolve_include(src: &str, depth: PageDepth) -> String {
    match src {
        "header" => depth.resolve_asset(HEADER_PATH),
        "footer" => depth.resolve_asset(FOOTER_PATH),
        other => other.to_owned(),
    }
}

/// Fetch every `[data-include]` placeholder concurrently and splice each
/// result in place. Resolves once all of them have settled.
pub async fn load_includes() {
    #[cfg(feature = "csr")]
    {
        let Some(document) = crate::util::dom::document() else {
            return;
        };
        let depth = PageDepth::current();
        let placeholders = crate::util::dom::query_all(&document, &format!("[{INCLUDE_ATTR}]"));
        let loads = placeholders.into_iter().filter_map(|node| {
            let src = node.get_attribute(INCLUDE_ATTR)?;
            Some(async move {
                let url = resolve_include(&src, depth);
                match crate::net::api::fetch_text(&url).await {
                    Ok(html) => node.set_outer_html(&html),
                    Err(e) => log::warn!("could not load fragment {src}: {e}"),
                }
            })
        });
        futures::future::join_all(loads).await;
    }
}
