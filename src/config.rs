//! Updater configuration.
//!
//! Every markup constant the updater works with lives here: the target file
//! list, the hamburger fragment and the substrings that gate its insertion,
//! the sidebar tag rewrite, and the navigation links. The stock defaults are
//! the values the tool was written for, so running without any config file
//! edits the standard portfolio pages.
//!
//! ## Config File Location
//!
//! An optional `page-updater.toml` in the working directory is picked up
//! automatically; `--config <path>` points at one elsewhere.
//!
//! ```text
//! site/
//! ├── page-updater.toml        # Optional overrides
//! ├── education.html
//! ├── experience.html
//! └── ...
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want.
//!
//! ```toml
//! # Only process two pages
//! files = ["contact.html", "projects.html"]
//! ```
//!
//! Arrays (`files`, `navigation.links`) replace the stock value wholesale.
//! Unknown keys are rejected to catch typos early.

use crate::types::NavLink;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "page-updater.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Invalid navigation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Full updater configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdaterConfig {
    /// Pages to update, processed in this order.
    pub files: Vec<String>,
    /// Hamburger menu fragment and its insertion gates.
    pub hamburger: HamburgerConfig,
    /// Sidebar opening-tag rewrite.
    pub sidebar: SidebarConfig,
    /// Sidebar navigation block.
    pub navigation: NavigationConfig,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            files: [
                "education.html",
                "experience.html",
                "projects.html",
                "publications.html",
                "contact.html",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
            hamburger: HamburgerConfig::default(),
            sidebar: SidebarConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl UpdaterConfig {
    /// Validate that the config can produce a well-formed update.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.files.is_empty() {
            return Err(ConfigError::Validation("files must not be empty".into()));
        }
        if self.hamburger.marker.is_empty() {
            return Err(ConfigError::Validation(
                "hamburger.marker must not be empty".into(),
            ));
        }
        if self.hamburger.anchor.is_empty() {
            return Err(ConfigError::Validation(
                "hamburger.anchor must not be empty".into(),
            ));
        }
        if self.sidebar.tag.is_empty() || self.sidebar.replacement.is_empty() {
            return Err(ConfigError::Validation(
                "sidebar.tag and sidebar.replacement must not be empty".into(),
            ));
        }
        if self.navigation.class.is_empty() {
            return Err(ConfigError::Validation(
                "navigation.class must not be empty".into(),
            ));
        }
        if self.navigation.links.is_empty() {
            return Err(ConfigError::Validation(
                "navigation.links must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for link in &self.navigation.links {
            if !seen.insert(link.href.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "navigation.links has duplicate href '{}'",
                    link.href
                )));
            }
        }
        // Each page must find itself in the nav, or no entry gets marked active.
        for file in &self.files {
            if !seen.contains(file.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "file '{file}' has no entry in navigation.links"
                )));
            }
        }
        Ok(())
    }
}

/// Hamburger menu insertion settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HamburgerConfig {
    /// Substring whose presence means the fragment is already in the page.
    pub marker: String,
    /// Substring the fragment is inserted in front of.
    pub anchor: String,
    /// Markup inserted verbatim.
    pub fragment: String,
}

impl Default for HamburgerConfig {
    fn default() -> Self {
        Self {
            marker: "menu-toggle".to_string(),
            anchor: "        <!-- Sidebar Navigation -->".to_string(),
            fragment: HAMBURGER_FRAGMENT.to_string(),
        }
    }
}

const HAMBURGER_FRAGMENT: &str = r#"        <!-- Hamburger Menu Button -->
        <button class="menu-toggle" id="menuToggle" aria-label="Toggle menu">
            <span></span>
            <span></span>
            <span></span>
        </button>

        <!-- Sidebar Overlay -->
        <div class="sidebar-overlay" id="sidebarOverlay"></div>

"#;

/// Sidebar tag rewrite. Plain substring replacement, not attribute-aware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    pub tag: String,
    pub replacement: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            tag: r#"<aside class="sidebar">"#.to_string(),
            replacement: r#"<aside class="sidebar" id="sidebar">"#.to_string(),
        }
    }
}

/// Navigation block settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Class on the `<nav>` tag that identifies the block to replace.
    pub class: String,
    /// Class carried by every link.
    pub link_class: String,
    /// Token appended to the current page's link class.
    pub active_class: String,
    /// Links in display order.
    pub links: Vec<NavLink>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            class: "sidebar-nav".to_string(),
            link_class: "nav-link".to_string(),
            active_class: "active".to_string(),
            links: vec![
                NavLink::new("index.html", "HOME"),
                NavLink::new("about.html", "ABOUT"),
                NavLink::new("skills.html", "SKILLS"),
                NavLink::new("education.html", "EDUCATION"),
                NavLink::new("experience.html", "EXPERIENCE"),
                NavLink::new("projects.html", "PROJECTS"),
                NavLink::new("publications.html", "PUBLICATIONS"),
                NavLink::new("contact.html", "CONTACT"),
            ],
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(UpdaterConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<UpdaterConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: UpdaterConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the updater config.
///
/// An explicit path must exist. Otherwise `page-updater.toml` in `dir` is
/// used when present, and the stock defaults when not.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<UpdaterConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let candidate = dir.join(CONFIG_FILE);
            if !candidate.exists() {
                return resolve_config(None);
            }
            candidate
        }
    };
    let content = fs::read_to_string(&path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Returns a fully-commented stock `page-updater.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Page Updater Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as page-updater.toml next to the pages, or pass
# --config <path>. Unknown keys will cause an error.

# Pages to update, in processing order. Each must have a navigation link.
files = [
    "education.html",
    "experience.html",
    "projects.html",
    "publications.html",
    "contact.html",
]

# ---------------------------------------------------------------------------
# Hamburger menu
# ---------------------------------------------------------------------------
[hamburger]
# Pages already containing this text are left alone.
marker = "menu-toggle"

# The fragment is inserted right before the first occurrence of this text.
# Pages without it are saved without the fragment.
anchor = "        <!-- Sidebar Navigation -->"

fragment = '''
        <!-- Hamburger Menu Button -->
        <button class="menu-toggle" id="menuToggle" aria-label="Toggle menu">
            <span></span>
            <span></span>
            <span></span>
        </button>

        <!-- Sidebar Overlay -->
        <div class="sidebar-overlay" id="sidebarOverlay"></div>

'''

# ---------------------------------------------------------------------------
# Sidebar tag (every literal occurrence is rewritten)
# ---------------------------------------------------------------------------
[sidebar]
tag = '<aside class="sidebar">'
replacement = '<aside class="sidebar" id="sidebar">'

# ---------------------------------------------------------------------------
# Navigation block
# ---------------------------------------------------------------------------
[navigation]
# The first <nav class="..."> ... </nav> block with this class is replaced.
class = "sidebar-nav"
link_class = "nav-link"
# Appended to the link class of the page being processed.
active_class = "active"

[[navigation.links]]
href = "index.html"
label = "HOME"

[[navigation.links]]
href = "about.html"
label = "ABOUT"

[[navigation.links]]
href = "skills.html"
label = "SKILLS"

[[navigation.links]]
href = "education.html"
label = "EDUCATION"

[[navigation.links]]
href = "experience.html"
label = "EXPERIENCE"

[[navigation.links]]
href = "projects.html"
label = "PROJECTS"

[[navigation.links]]
href = "publications.html"
label = "PUBLICATIONS"

[[navigation.links]]
href = "contact.html"
label = "CONTACT"
"##
}
