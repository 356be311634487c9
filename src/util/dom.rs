//! Thin web-sys helpers for querying and patching markup.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// All elements under `document` matching `selector`, in document order.
///
/// An invalid selector yields an empty list.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("invalid selector: {selector}");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current reference of an SVG `<use>`, preferring `href` over `xlink:href`.
pub fn use_href(el: &Element) -> Option<String> {
    crate::util::page::use_reference(el.get_attribute("href"), el.get_attribute("xlink:href"))
}

/// Point an SVG `<use>` at `target`, writing both `href` and `xlink:href`
/// for older renderers.
pub fn set_use_href(el: &Element, target: &str) {
    let _ = el.set_attribute("href", target);
    let _ = el.set_attribute_ns(Some(XLINK_NS), "xlink:href", target);
}

/// Set inline `opacity` and `transform` on `el` when it is an HTML element.
pub fn set_opacity_transform(el: &Element, opacity: &str, transform: &str) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    let _ = style.set_property("opacity", opacity);
    let _ = style.set_property("transform", transform);
}

/// `window.matchMedia(query).matches`, `false` when unsupported.
pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|mq| mq.matches())
}
