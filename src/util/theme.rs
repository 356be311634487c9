//! Light/dark theme preference.
//!
//! Reads the stored preference from `localStorage` and reflects it as a body
//! class, `theme-light` or `theme-dark`. Exactly one of the two is present
//! after [`apply`]. The toggle control writes the new value back.
//!
//! TRADE-OFFS
//! ==========
//! Dark is the default. Only the literal `"light"` selects the light variant;
//! missing, malformed, or legacy values all read as dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::SiteConfig;
use crate::util::storage;

#[cfg(not(feature = "csr"))]
thread_local! {
    static ACTIVE: std::cell::Cell<Theme> = const { std::cell::Cell::new(Theme::Dark) };
}

pub const LIGHT_CLASS: &str = "theme-light";
pub const DARK_CLASS: &str = "theme-dark";
pub const TOGGLE_ID: &str = "themeToggle";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value persisted to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Body class that marks this variant active.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => LIGHT_CLASS,
            Self::Dark => DARK_CLASS,
        }
    }
}

/// Read the persisted preference.
pub fn read_preference(config: &SiteConfig) -> Theme {
    Theme::from_stored(storage::load(&config.theme_storage_key).as_deref())
}

/// Set the active variant class on `<body>` and clear the other one.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let classes = body.class_list();
        let _ = classes.remove_1(theme.toggled().class());
        let _ = classes.add_1(theme.class());
    }
    #[cfg(not(feature = "csr"))]
    {
        ACTIVE.with(|active| active.set(theme));
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(config: &SiteConfig, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save(&config.theme_storage_key, next.as_str());
    next
}

/// The theme currently shown on `<body>`. Falls back to dark.
pub fn active() -> Theme {
    #[cfg(feature = "csr")]
    {
        let is_light = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .is_some_and(|body| body.class_list().contains(LIGHT_CLASS));
        if is_light { Theme::Light } else { Theme::Dark }
    }
    #[cfg(not(feature = "csr"))]
    {
        ACTIVE.with(std::cell::Cell::get)
    }
}

/// Apply the stored preference and wire the toggle control, if present.
pub fn init(config: &SiteConfig) {
    apply(read_preference(config));

    #[cfg(feature = "csr")]
    {
        let Some(toggle_el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(TOGGLE_ID))
        else {
            return;
        };
        let config = config.clone();
        gloo_events::EventListener::new(&toggle_el, "click", move |_| {
            let _ = toggle(&config, active());
        })
        .forget();
    }
}
