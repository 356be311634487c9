//! Scroll-driven reveal of cards, chips, and the hero copy.
//!
//! Skipped entirely under `prefers-reduced-motion: reduce`, in which case
//! no inline styles are ever touched.

use crate::config::SiteConfig;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Hide every reveal target and observe it until its first intersection.
pub fn init(config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        use crate::state::reveal::{RevealState, initial_styles, styles};
        use crate::util::dom;

        let Some((opacity, transform)) = initial_styles(dom::media_matches(REDUCED_MOTION_QUERY)) else {
            log::debug!("reduced motion requested; scroll reveal skipped");
            return;
        };
        let Some(document) = dom::document() else {
            return;
        };
        let targets = dom::query_all(&document, &config.reveal_selector());
        if targets.is_empty() {
            return;
        }

        let threshold = config.reveal_threshold;
        let mut states = vec![RevealState::Pending; targets.len()];
        let elements: Rc<Vec<Element>> = Rc::new(targets);

        let elements_cb = Rc::clone(&elements);
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(idx) = elements_cb.iter().position(|el| el == &target) else {
                    continue;
                };
                let Some(state) = states.get_mut(idx) else {
                    continue;
                };
                if state.observe(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    let (opacity, transform) = styles(*state);
                    dom::set_opacity_transform(&target, opacity, transform);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {e:?}");
                return;
            }
        };

        for el in elements.iter() {
            dom::set_opacity_transform(el, opacity, transform);
            observer.observe(el);
        }
        // Lives for the page lifetime.
        callback.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
