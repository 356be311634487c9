//! Mobile navigation controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The menu container (`#primaryNav`) and its toggle (`#menuToggle`) arrive
//! with the header fragment. The `open` class on the container is the state
//! of record; every trigger reads it, runs [`NavState::transition`], and
//! writes the result back along with `aria-expanded` and the toggle glyph.

pub use crate::state::nav::{NavEvent, NavState};

pub const TOGGLE_ID: &str = "menuToggle";
pub const MENU_ID: &str = "primaryNav";
pub const OPEN_CLASS: &str = "open";

#[cfg(feature = "csr")]
fn current(menu: &web_sys::Element) -> NavState {
    if menu.class_list().contains(OPEN_CLASS) { NavState::Open } else { NavState::Closed }
}

#[cfg(feature = "csr")]
fn set_icon(toggle: &web_sys::Element, state: NavState) {
    if let Ok(Some(glyph)) = toggle.query_selector("use") {
        crate::util::dom::set_use_href(&glyph, state.icon());
    }
}

#[cfg(feature = "csr")]
fn render(menu: &web_sys::Element, toggle: &web_sys::Element, state: NavState) {
    let classes = menu.class_list();
    let _ = if state.is_open() { classes.add_1(OPEN_CLASS) } else { classes.remove_1(OPEN_CLASS) };
    let _ = toggle.set_attribute("aria-expanded", state.aria_expanded());
    set_icon(toggle, state);
}

#[cfg(feature = "csr")]
fn dispatch(menu: &web_sys::Element, toggle: &web_sys::Element, event: NavEvent, breakpoint: f64) {
    let state = current(menu);
    let next = state.transition(event, breakpoint);
    if next != state {
        render(menu, toggle, next);
    }
}

/// Point the toggle glyph at the icon matching the menu's current state.
#[cfg(feature = "csr")]
pub fn sync_toggle_icon(document: &web_sys::Document) {
    let Some(toggle) = document.get_element_by_id(TOGGLE_ID) else {
        return;
    };
    let state = document.get_element_by_id(MENU_ID).map_or(NavState::Closed, |menu| current(&menu));
    set_icon(&toggle, state);
}

/// Wire the five triggers. Missing toggle or menu makes this a no-op.
pub fn init(config: &crate::config::SiteConfig) {
    #[cfg(feature = "csr")]
    {
        use gloo_events::EventListener;
        use wasm_bindgen::JsCast;

        let Some(window) = crate::util::dom::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let (Some(toggle), Some(menu)) = (document.get_element_by_id(TOGGLE_ID), document.get_element_by_id(MENU_ID))
        else {
            return;
        };
        let breakpoint = config.nav_breakpoint_px;

        {
            let (menu, toggle_el) = (menu.clone(), toggle.clone());
            EventListener::new(&toggle, "click", move |event| {
                event.stop_propagation();
                dispatch(&menu, &toggle_el, NavEvent::ToggleClicked, breakpoint);
            })
            .forget();
        }

        {
            let (menu_el, toggle) = (menu.clone(), toggle.clone());
            EventListener::new(&menu, "click", move |event| {
                let on_link = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest("a").ok().flatten())
                    .is_some();
                if on_link {
                    dispatch(&menu_el, &toggle, NavEvent::LinkClicked, breakpoint);
                }
            })
            .forget();
        }

        {
            let (menu, toggle) = (menu.clone(), toggle.clone());
            EventListener::new(&document, "click", move |event| {
                if !current(&menu).is_open() {
                    return;
                }
                let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                let inside = menu.contains(target.as_ref()) || toggle.contains(target.as_ref());
                if !inside {
                    dispatch(&menu, &toggle, NavEvent::OutsideClicked, breakpoint);
                }
            })
            .forget();
        }

        {
            let (menu, toggle) = (menu.clone(), toggle.clone());
            EventListener::new(&document, "keydown", move |event| {
                let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>().map(web_sys::KeyboardEvent::key) else {
                    return;
                };
                if let Some(nav_event) = crate::state::nav::key_event(&key) {
                    dispatch(&menu, &toggle, nav_event, breakpoint);
                }
            })
            .forget();
        }

        {
            let win = window.clone();
            EventListener::new(&window, "resize", move |_| {
                let Some(width) = win.inner_width().ok().and_then(|w| w.as_f64()) else {
                    return;
                };
                dispatch(&menu, &toggle, NavEvent::Resized { width }, breakpoint);
            })
            .forget();
        }

        log::debug!("navigation controller ready");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
