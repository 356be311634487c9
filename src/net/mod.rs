//! Networking for same-site resources.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP calls (fragments, sprite, project data, CV probe)
//! and `types` defines the schema of `data/projects.json`.

pub mod api;
pub mod types;
