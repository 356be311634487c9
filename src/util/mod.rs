//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, DOM
//! queries, location) from component logic to improve reuse and testability.

#[cfg(feature = "csr")]
pub mod dom;
pub mod page;
pub mod storage;
pub mod theme;
