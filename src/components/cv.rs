//! CV download with a print-to-PDF fallback.
//!
//! The click is held while a `HEAD` probe checks the file. When the file is
//! there, the click is replayed with a one-shot bypass so the browser's own
//! download runs untouched. When it is not, the print dialog opens instead
//! so the visitor can save the current page as a PDF.

#[cfg(test)]
#[path = "cv_test.rs"]
mod cv_test;

use crate::config::SiteConfig;

pub const LINK_ID: &str = "downloadCv";

/// Fallback selector for a CV link without the id.
#[must_use]
pub fn link_selector(config: &SiteConfig) -> String {
    format!("a[href$=\"{}\"]", config.cv_file_name)
}

/// Outcome of an existence probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Let the default download proceed.
    Download,
    /// Open the print dialog instead.
    Print,
}

impl ProbeOutcome {
    #[must_use]
    pub fn from_probe<E>(result: &Result<(), E>) -> Self {
        if result.is_ok() { Self::Download } else { Self::Print }
    }
}

/// Attach the probe-and-fallback handler to the CV link, if present.
pub fn init(config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use gloo_events::{EventListener, EventListenerOptions};
        use wasm_bindgen::JsCast;

        let Some(document) = crate::util::dom::document() else {
            return;
        };
        let Some(link) = document
            .get_element_by_id(LINK_ID)
            .or_else(|| document.query_selector(&link_selector(config)).ok().flatten())
        else {
            return;
        };

        let bypass = Rc::new(Cell::new(false));
        let print_delay = config.print_delay_ms;
        let link_el = link.clone();
        EventListener::new_with_options(&link, "click", EventListenerOptions::enable_prevent_default(), move |event| {
            if bypass.replace(false) {
                return;
            }
            let Some(href) = link_el.get_attribute("href") else {
                return;
            };
            event.prevent_default();
            let bypass = Rc::clone(&bypass);
            let link_el = link_el.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let probe = crate::net::api::probe(&href).await;
                match ProbeOutcome::from_probe(&probe) {
                    ProbeOutcome::Download => {
                        bypass.set(true);
                        if let Some(anchor) = link_el.dyn_ref::<web_sys::HtmlElement>() {
                            anchor.click();
                        }
                    }
                    ProbeOutcome::Print => {
                        if let Err(e) = probe {
                            log::warn!("CV unavailable, falling back to print: {e}");
                        }
                        gloo_timers::callback::Timeout::new(print_delay, || {
                            if let Some(window) = web_sys::window() {
                                let _ = window.print();
                            }
                        })
                        .forget();
                    }
                }
            });
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
