//! Site configuration with optional per-page overrides.
//!
//! Defaults describe the portfolio as shipped. A page may embed
//! `<script type="application/json" id="folio-config">{...}</script>`; any
//! fields present there replace the defaults, the rest keep their values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional inline JSON override.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_NAV_BREAKPOINT_PX: f64 = 800.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
pub const DEFAULT_FEATURED_LIMIT: usize = 4;
pub const DEFAULT_PRINT_DELAY_MS: u32 = 10;
pub const DEFAULT_CONTACT_RECIPIENT: &str = "blessedkingkingsley2002@gmail.com";
pub const DEFAULT_PROJECTS_DATA_PATH: &str = "data/projects.json";
pub const DEFAULT_CV_FILE_NAME: &str = "Kingsley_Maduabuchi_CV.pdf";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key for the theme preference.
    pub theme_storage_key: String,
    /// Viewport width above which an open mobile menu closes.
    pub nav_breakpoint_px: f64,
    /// Visible fraction at which an element is revealed.
    pub reveal_threshold: f64,
    /// Selectors whose matches take part in scroll reveal.
    pub reveal_selectors: Vec<String>,
    /// Maximum cards in the featured grid.
    pub featured_limit: usize,
    /// Root-relative path of the project data file.
    pub projects_data_path: String,
    /// Sprite documents to try, in order, root-relative.
    pub sprite_candidates: Vec<String>,
    /// Fixed recipient for the contact form.
    pub contact_recipient: String,
    /// File name matched when the CV link carries no id.
    pub cv_file_name: String,
    /// Delay before the print fallback opens.
    pub print_delay_ms: u32,
    /// Minimum level for console logging (`error` .. `trace`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            nav_breakpoint_px: DEFAULT_NAV_BREAKPOINT_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_selectors: vec![".card".to_owned(), ".chip".to_owned(), ".hero-left".to_owned()],
            featured_limit: DEFAULT_FEATURED_LIMIT,
            projects_data_path: DEFAULT_PROJECTS_DATA_PATH.to_owned(),
            sprite_candidates: vec![
                "assets/icons/icons-sprite.svg".to_owned(),
                "assets/icons/icon-sprite.svg".to_owned(),
                "assets/icons/icon-sprite.xml".to_owned(),
            ],
            contact_recipient: DEFAULT_CONTACT_RECIPIENT.to_owned(),
            cv_file_name: DEFAULT_CV_FILE_NAME.to_owned(),
            print_delay_ms: DEFAULT_PRINT_DELAY_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an override document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Combined selector for scroll reveal targets.
    #[must_use]
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }

    /// Parsed log level, `Info` when unrecognized.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Build config from the page override element, if any.
    ///
    /// Runs before logging is initialized, so a bad override comes back as
    /// the second tuple element for the caller to log once the logger is up.
    pub fn load() -> (Self, Option<serde_json::Error>) {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                    Ok(config) => (config, None),
                    Err(e) => (Self::default(), Some(e)),
                },
                _ => (Self::default(), None),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            (Self::default(), None)
        }
    }
}
