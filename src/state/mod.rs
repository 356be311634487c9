//! Page-local state machines.
//!
//! These types hold no DOM handles. Components own the elements and feed
//! events through the machines, then mirror the resulting state.

pub mod nav;
pub mod reveal;
