//! Shared types used by configuration and navigation rendering.

use serde::{Deserialize, Serialize};

/// One entry of the sidebar navigation.
///
/// The `href` is the page filename the link points at; it is also how the
/// updater finds the entry to mark active when processing that page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}
