//! One-shot scroll reveal bookkeeping.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(12px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

/// Browsers report the ratio at a threshold crossing with float error, so a
/// crossing at 0.12 can arrive as 0.1199.
const RATIO_SLACK: f64 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Hidden and waiting for its first intersection.
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Apply an intersection report. Returns `true` exactly once, when the
    /// element should transition to its final visual state.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if *self == Self::Revealed || !crosses_threshold(is_intersecting, ratio, threshold) {
            return false;
        }
        *self = Self::Revealed;
        true
    }
}

/// Whether an intersection report counts as visible.
#[must_use]
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_SLACK >= threshold
}

/// `(opacity, transform)` pairs for each state.
#[must_use]
pub fn styles(state: RevealState) -> (&'static str, &'static str) {
    match state {
        RevealState::Pending => (HIDDEN_OPACITY, HIDDEN_TRANSFORM),
        RevealState::Revealed => (SHOWN_OPACITY, SHOWN_TRANSFORM),
    }
}

/// Hidden style to set before observing, or `None` when reduced motion is
/// requested and elements must keep their authored style.
#[must_use]
pub fn initial_styles(reduced_motion: bool) -> Option<(&'static str, &'static str)> {
    if reduced_motion { None } else { Some(styles(RevealState::Pending)) }
}
