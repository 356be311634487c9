//! Data file schemas.
//!
//! DESIGN
//! ======
//! `data/projects.json` is authored by hand; `stack` is optional and a
//! missing list reads the same as an empty one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// One entry of the project collection. Identity is array position.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    /// One or two sentence summary shown on the card.
    pub excerpt: String,
    /// Root-relative image path, or an absolute URL.
    pub image: String,
    /// Case-study link, root-relative or absolute.
    pub url: String,
    /// Technology tags, rendered as chips in order.
    #[serde(default, deserialize_with = "deserialize_stack")]
    pub stack: Vec<String>,
}

fn deserialize_stack<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse the project collection.
///
/// # Errors
///
/// Returns the serde error when `raw` is not an array of projects.
pub fn parse_projects(raw: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(raw)
}
