use super::*;

const THRESHOLD: f64 = 0.12;

#[test]
fn first_qualifying_intersection_reveals() {
    let mut state = RevealState::default();
    assert!(state.observe(true, 0.5, THRESHOLD));
    assert_eq!(state, RevealState::Revealed);
}

#[test]
fn reveal_happens_only_once() {
    let mut state = RevealState::Pending;
    assert!(state.observe(true, 0.2, THRESHOLD));
    assert!(!state.observe(true, 0.9, THRESHOLD));
    assert!(!state.observe(false, 0.0, THRESHOLD));
    assert!(!state.observe(true, 1.0, THRESHOLD));
    assert_eq!(state, RevealState::Revealed);
}

#[test]
fn below_threshold_or_not_intersecting_stays_pending() {
    let mut state = RevealState::Pending;
    assert!(!state.observe(true, 0.05, THRESHOLD));
    assert!(!state.observe(false, 0.5, THRESHOLD));
    assert_eq!(state, RevealState::Pending);
    assert!(state.observe(true, THRESHOLD, THRESHOLD));
}

#[test]
fn styles_describe_hidden_and_final_states() {
    assert_eq!(styles(RevealState::Pending), ("0", "translateY(12px)"));
    assert_eq!(styles(RevealState::Revealed), ("1", "translateY(0)"));
}

#[test]
fn ratio_rounded_just_under_threshold_still_counts() {
    assert!(crosses_threshold(true, 0.1199, THRESHOLD));
    assert!(!crosses_threshold(true, 0.1, THRESHOLD));
}

#[test]
fn reduced_motion_sets_no_initial_style() {
    assert_eq!(initial_styles(true), None);
}

#[test]
fn full_motion_starts_hidden() {
    assert_eq!(initial_styles(false), Some((HIDDEN_OPACITY, HIDDEN_TRANSFORM)));
    assert_eq!(initial_styles(false), Some(styles(RevealState::Pending)));
}
