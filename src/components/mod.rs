//! Page components, one per enhancement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component finds its own elements and silently does nothing when the
//! page lacks them, so every page can run the same boot sequence.

pub mod contact;
pub mod cv;
pub mod footer;
pub mod fragments;
pub mod nav;
pub mod normalizer;
pub mod projects;
pub mod reveal;
pub mod sprite;
