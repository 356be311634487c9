//! Page depth detection and relative path resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages live either at the site root or one level down under `projects/`.
//! Shared markup (header, footer, sprite references, project data) is written
//! root-relative, so every consumer routes its paths through [`PageDepth`]
//! before touching the DOM.
//!
//! The `projects/` guard in [`PageDepth::resolve_link`] only covers that one
//! grouping. Adding another nested directory means generalizing it.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Directory that holds nested pages.
pub const NESTED_DIR: &str = "projects";

/// Directory that holds icon assets (sprite sheets and loose SVGs).
pub const ICON_DIR_PREFIX: &str = "assets/icons/";

const PARENT_PREFIX: &str = "../";

/// Where the current page sits relative to the site root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageDepth {
    #[default]
    Root,
    /// One level under [`NESTED_DIR`].
    Nested,
}

impl PageDepth {
    /// Derive depth from a URL pathname such as `/projects/alpha.html`.
    #[must_use]
    pub fn from_pathname(pathname: &str) -> Self {
        if pathname
            .split('/')
            .filter(|segment| !segment.is_empty())
            .any(|segment| segment == NESTED_DIR)
        {
            Self::Nested
        } else {
            Self::Root
        }
    }

    /// Read depth from `window.location`. Falls back to [`PageDepth::Root`].
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .map_or(Self::Root, |path| Self::from_pathname(&path))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::Root
        }
    }

    #[must_use]
    pub fn is_nested(self) -> bool {
        self == Self::Nested
    }

    /// Relative prefix reaching the site root from this depth.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::Nested => PARENT_PREFIX,
        }
    }

    /// Concrete `href` for an abstract root-relative link target.
    ///
    /// Nested pages always climb one level. A target already under
    /// `projects/` still climbs, so `projects/x.html` from inside
    /// `projects/` becomes `../projects/x.html` rather than
    /// `projects/projects/x.html`.
    #[must_use]
    pub fn resolve_link(self, target: &str) -> String {
        match self {
            Self::Root => target.to_owned(),
            Self::Nested => format!("{PARENT_PREFIX}{target}"),
        }
    }

    /// Rewrite an icon reference under [`ICON_DIR_PREFIX`] for this depth.
    ///
    /// Returns `None` when the reference needs no change, which keeps the
    /// normalizer idempotent across repeated passes.
    #[must_use]
    pub fn resolve_icon_href(self, href: &str) -> Option<String> {
        if self.is_nested() && href.starts_with(ICON_DIR_PREFIX) {
            Some(format!("{PARENT_PREFIX}{href}"))
        } else {
            None
        }
    }

    /// Resolve an asset or link path from data files.
    ///
    /// Absolute `http://`/`https://` URLs pass through verbatim.
    #[must_use]
    pub fn resolve_asset(self, path: &str) -> String {
        if is_absolute_url(path) {
            path.to_owned()
        } else {
            format!("{}{path}", self.prefix())
        }
    }
}

/// Case-insensitive `http://` or `https://` check.
#[must_use]
pub fn is_absolute_url(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fragment portion (`#id`) of an icon reference, if any.
#[must_use]
pub fn fragment_only(reference: &str) -> Option<&str> {
    reference.find('#').map(|idx| &reference[idx..])
}

/// The reference an SVG `<use>` points at. `href` wins over `xlink:href`
/// unless it is missing or empty.
#[must_use]
pub fn use_reference(href: Option<String>, xlink_href: Option<String>) -> Option<String> {
    href.filter(|h| !h.is_empty()).or_else(|| xlink_href.filter(|h| !h.is_empty()))
}
