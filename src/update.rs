//! The page updater.
//!
//! Each target page goes through the same fixed sequence:
//!
//! ```text
//! 1. Load       read the page as UTF-8
//! 2. Hamburger  insert the menu fragment before the sidebar anchor (once)
//! 3. Sidebar    rewrite every `<aside class="sidebar">` to carry its id
//! 4. Nav        replace the first `<nav class="sidebar-nav">…</nav>` block
//! 5. Save       write the result back over the page
//! ```
//!
//! All edits are textual. A missing anchor or nav block is not an error: the
//! step is skipped and the page is still saved with whatever else applied.
//!
//! Failures are per page. A missing page or an unreadable one is reported
//! and the batch moves on to the next page; nothing aborts the run.

use crate::config::{ConfigError, UpdaterConfig};
use crate::nav;
use regex::{NoExpand, Regex};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{Level, debug, info, warn};

/// Per-page failure. The batch continues past either kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("File not found: {file}")]
    NotFound { file: String },
    #[error("Error updating {file}: {message}")]
    Failed { file: String, message: String },
}

impl UpdateError {
    /// Name of the page the error belongs to.
    pub fn file(&self) -> &str {
        match self {
            UpdateError::NotFound { file } | UpdateError::Failed { file, .. } => file,
        }
    }

    fn from_read(file: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            UpdateError::NotFound {
                file: file.to_string(),
            }
        } else {
            UpdateError::Failed {
                file: file.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Whether pages are written back or only inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    DryRun,
}

/// What the hamburger step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HamburgerStep {
    Inserted,
    /// Marker already in the page.
    AlreadyPresent,
    /// Anchor not found; nothing inserted.
    AnchorMissing,
}

/// What the navigation step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavStep {
    /// Block replaced; `active` is the label of the entry marked active.
    Replaced { active: Option<String> },
    /// No block matched; content left as is.
    BlockMissing,
}

/// Step-by-step account of one page's transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChanges {
    pub hamburger: HamburgerStep,
    /// Number of sidebar tags that received the id attribute.
    pub sidebar_ids_added: usize,
    pub navigation: NavStep,
    /// Whether the transformed text differs from what was read.
    pub changed: bool,
}

/// Result for one page of the batch.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub file: String,
    pub result: Result<FileChanges, UpdateError>,
}

/// Results for the whole batch, in processing order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn updated(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn not_found(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, Err(UpdateError::NotFound { .. })))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, Err(UpdateError::Failed { .. })))
            .count()
    }
}

/// Applies the configured edits to pages.
#[derive(Debug)]
pub struct PageUpdater {
    config: UpdaterConfig,
    nav_block: Regex,
}

impl PageUpdater {
    /// Validate the config and compile the nav-block pattern.
    pub fn new(config: UpdaterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pattern = format!(
            r#"(?s)<nav class="{}">.*?</nav>"#,
            regex::escape(&config.navigation.class)
        );
        let nav_block = Regex::new(&pattern)?;
        Ok(Self { config, nav_block })
    }

    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Insert the hamburger fragment in front of the first anchor occurrence,
    /// unless the marker shows it is already there.
    pub fn insert_hamburger(&self, content: &str) -> (String, HamburgerStep) {
        let hamburger = &self.config.hamburger;
        if content.contains(&hamburger.marker) {
            return (content.to_string(), HamburgerStep::AlreadyPresent);
        }
        if !content.contains(&hamburger.anchor) {
            return (content.to_string(), HamburgerStep::AnchorMissing);
        }
        let with_fragment = format!("{}{}", hamburger.fragment, hamburger.anchor);
        (
            content.replacen(&hamburger.anchor, &with_fragment, 1),
            HamburgerStep::Inserted,
        )
    }

    /// Rewrite every literal sidebar tag, returning how many were rewritten.
    pub fn add_sidebar_id(&self, content: &str) -> (String, usize) {
        let sidebar = &self.config.sidebar;
        let count = content.matches(&sidebar.tag).count();
        if count == 0 {
            return (content.to_string(), 0);
        }
        (content.replace(&sidebar.tag, &sidebar.replacement), count)
    }

    /// Replace the first navigation block with one rendered for `filename`.
    pub fn replace_nav_block(&self, content: &str, filename: &str) -> (String, NavStep) {
        if !self.nav_block.is_match(content) {
            return (content.to_string(), NavStep::BlockMissing);
        }
        let nav = &self.config.navigation;
        let block = nav::render_for_page(nav, filename);
        let replaced = self
            .nav_block
            .replacen(content, 1, NoExpand(block.as_str()))
            .into_owned();
        let active = nav::label_for(nav, filename).map(str::to_string);
        (replaced, NavStep::Replaced { active })
    }

    /// Run the three edit steps over a page's text.
    pub fn transform(&self, content: &str, filename: &str) -> (String, FileChanges) {
        let (text, hamburger) = self.insert_hamburger(content);
        let (text, sidebar_ids_added) = self.add_sidebar_id(&text);
        let (text, navigation) = self.replace_nav_block(&text, filename);
        let changed = text != content;
        (
            text,
            FileChanges {
                hamburger,
                sidebar_ids_added,
                navigation,
                changed,
            },
        )
    }

    /// Load, transform and (in [`Mode::Write`]) save one page in `dir`.
    ///
    /// Line endings are read as universal newlines: `\r\n` and lone `\r`
    /// become `\n`, so saved pages are all-LF.
    ///
    /// The page is always written back in write mode, even when nothing changed.
    pub fn update_file(
        &self,
        dir: &Path,
        filename: &str,
        mode: Mode,
    ) -> Result<FileChanges, UpdateError> {
        let path = dir.join(filename);
        let raw = fs::read_to_string(&path).map_err(|e| UpdateError::from_read(filename, e))?;
        let content = normalize_newlines(&raw);

        let (updated, mut changes) = self.transform(&content, filename);
        changes.changed |= content != raw;
        log_changes(filename, &changes);

        if mode == Mode::Write {
            fs::write(&path, updated).map_err(|e| UpdateError::Failed {
                file: filename.to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(changes)
    }

    /// Process every configured page in order.
    ///
    /// `on_file` sees each outcome as soon as its page is done, so callers can
    /// report progress while the batch runs.
    pub fn run(
        &self,
        dir: &Path,
        mode: Mode,
        mut on_file: impl FnMut(&FileOutcome),
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for file in &self.config.files {
            let result = self.update_file(dir, file, mode);
            match &result {
                Ok(_) => info!(file = %file, ?mode, "page processed"),
                Err(e) if outcome_level(&result) == Level::WARN => {
                    warn!(file = %file, error = %e, "page skipped")
                }
                Err(e) => info!(file = %file, error = %e, "page skipped"),
            }
            let outcome = FileOutcome {
                file: file.clone(),
                result,
            };
            on_file(&outcome);
            report.outcomes.push(outcome);
        }
        report
    }
}

/// Missing pages already get their own report line; only real failures warn.
fn outcome_level(result: &Result<FileChanges, UpdateError>) -> Level {
    match result {
        Err(UpdateError::Failed { .. }) => Level::WARN,
        Ok(_) | Err(UpdateError::NotFound { .. }) => Level::INFO,
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn log_changes(filename: &str, changes: &FileChanges) {
    match changes.hamburger {
        HamburgerStep::Inserted => debug!(file = filename, "hamburger fragment inserted"),
        HamburgerStep::AlreadyPresent => debug!(file = filename, "hamburger marker present"),
        HamburgerStep::AnchorMissing => {
            debug!(file = filename, "sidebar anchor missing, fragment not inserted")
        }
    }
    debug!(
        file = filename,
        count = changes.sidebar_ids_added,
        "sidebar tags rewritten"
    );
    match &changes.navigation {
        NavStep::Replaced { active } => {
            debug!(file = filename, active = ?active, "navigation block replaced")
        }
        NavStep::BlockMissing => debug!(file = filename, "navigation block missing"),
    }
}
