//! Mobile navigation disclosure state.
//!
//! DESIGN
//! ======
//! Two states and five triggers. Only the toggle button can open the menu;
//! every other trigger is a close guard that leaves `Closed` untouched.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const MENU_ICON: &str = "#icon-menu";
pub const CLOSE_ICON: &str = "#icon-close";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

/// Inputs that can change the menu state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    ToggleClicked,
    /// A link inside the menu was activated.
    LinkClicked,
    /// A click landed outside both the menu and the toggle.
    OutsideClicked,
    EscapePressed,
    /// The viewport was resized to `width`.
    Resized { width: f64 },
}

impl NavState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Next state for `event`; `breakpoint` is the desktop width threshold.
    #[must_use]
    pub fn transition(self, event: NavEvent, breakpoint: f64) -> Self {
        match (self, event) {
            (Self::Closed, NavEvent::ToggleClicked) => Self::Open,
            (Self::Open, NavEvent::ToggleClicked) => Self::Closed,
            (Self::Open, NavEvent::LinkClicked | NavEvent::OutsideClicked | NavEvent::EscapePressed) => {
                Self::Closed
            }
            (Self::Open, NavEvent::Resized { width }) if width > breakpoint => Self::Closed,
            (state, _) => state,
        }
    }

    /// Sprite fragment shown on the toggle button.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Closed => MENU_ICON,
            Self::Open => CLOSE_ICON,
        }
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        match self {
            Self::Closed => "false",
            Self::Open => "true",
        }
    }
}

/// Map a `keydown` key name to a nav event.
#[must_use]
pub fn key_event(key: &str) -> Option<NavEvent> {
    (key == "Escape").then_some(NavEvent::EscapePressed)
}
