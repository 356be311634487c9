//! Relative link and icon path normalization.
//!
//! Links carry an abstract root-relative target in `data-href`; the
//! rendered `href` is always recomputed from it, so repeated passes settle
//! on the same values. Icon references under `assets/icons/` are prefixed
//! once and then no longer match the prefix.

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod normalizer_test;

use crate::util::page::{ICON_DIR_PREFIX, PageDepth};

pub const LINK_TARGET_ATTR: &str = "data-href";

/// Selector for icon references that still point at the icon directory.
#[must_use]
pub fn icon_selector() -> String {
    format!("use[href^=\"{ICON_DIR_PREFIX}\"]")
}

/// `href` to write for a `data-href` value, or `None` to leave it alone.
#[must_use]
pub fn link_href(target: Option<&str>, depth: PageDepth) -> Option<String> {
    let target = target.filter(|t| !t.is_empty())?;
    Some(depth.resolve_link(target))
}

/// One normalization pass over the current document.
pub fn normalize_paths(depth: PageDepth) {
    #[cfg(feature = "csr")]
    {
        use crate::util::dom;

        let Some(document) = dom::document() else {
            return;
        };

        for link in dom::query_all(&document, &format!("[{LINK_TARGET_ATTR}]")) {
            if let Some(href) = link_href(link.get_attribute(LINK_TARGET_ATTR).as_deref(), depth) {
                let _ = link.set_attribute("href", &href);
            }
        }

        for icon in dom::query_all(&document, &icon_selector()) {
            if let Some(href) = dom::use_href(&icon).and_then(|href| depth.resolve_icon_href(&href)) {
                dom::set_use_href(&icon, &href);
            }
        }

        crate::components::nav::sync_toggle_icon(&document);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = depth;
    }
}

/// Run another pass once the current task queue drains, after injected
/// markup has settled.
pub fn schedule_normalize(depth: PageDepth) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(0, move || {
            normalize_paths(depth);
            log::debug!("deferred path normalization done");
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = depth;
    }
}
