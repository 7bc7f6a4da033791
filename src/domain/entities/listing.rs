//! Listing entry entity rendered on the directory page.

use serde::Serialize;

/// A validated, render-ready directory entry.
///
/// All three fields are non-empty and trimmed. Instances are produced by
/// [`crate::domain::normalizer::normalize`]; there is no way to build one from
/// blank values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub name: String,
    pub link: String,
    pub description: String,
}

impl ListingEntry {
    /// Creates an entry, returning `None` if any field is blank after trimming.
    pub fn new(name: &str, link: &str, description: &str) -> Option<Self> {
        let (name, link, description) = (name.trim(), link.trim(), description.trim());

        if name.is_empty() || link.is_empty() || description.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            link: link.to_string(),
            description: description.to_string(),
        })
    }
}
