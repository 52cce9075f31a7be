//! CLI output formatting for the batch report.
//!
//! # Output Format
//!
//! ## Update
//!
//! One line per page as it finishes, then a completion notice:
//!
//! ```text
//! ✓ Updated education.html
//! ✗ File not found: experience.html
//! ✗ Error updating projects.html: Permission denied (os error 13)
//!
//! Batch update complete!
//! ```
//!
//! ## Check
//!
//! The dry run adds indented context lines describing each step:
//!
//! ```text
//! ✓ Would update contact.html
//!     Hamburger: inserted
//!     Sidebar id: added 1
//!     Navigation: replaced (active: CONTACT)
//!
//! Check complete, no files written.
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::update::{FileChanges, FileOutcome, HamburgerStep, Mode, NavStep};

const SUCCESS: &str = "✓";
const FAILURE: &str = "✗";

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the lines for one finished page.
///
/// Write mode yields exactly one line. Dry runs add step details for pages
/// that could be read.
pub fn format_outcome(outcome: &FileOutcome, mode: Mode) -> Vec<String> {
    match (&outcome.result, mode) {
        (Ok(_), Mode::Write) => vec![format!("{SUCCESS} Updated {}", outcome.file)],
        (Ok(changes), Mode::DryRun) => {
            let verb = if changes.changed {
                "Would update"
            } else {
                "Up to date"
            };
            let mut lines = vec![format!("{SUCCESS} {verb} {}", outcome.file)];
            lines.extend(format_changes(changes));
            lines
        }
        (Err(e), _) => vec![format!("{FAILURE} {e}")],
    }
}

/// Step detail lines, indented one level.
pub fn format_changes(changes: &FileChanges) -> Vec<String> {
    let hamburger = match changes.hamburger {
        HamburgerStep::Inserted => "inserted",
        HamburgerStep::AlreadyPresent => "already present",
        HamburgerStep::AnchorMissing => "anchor not found, skipped",
    };
    let sidebar = match changes.sidebar_ids_added {
        0 => "unchanged".to_string(),
        n => format!("added {n}"),
    };
    let navigation = match &changes.navigation {
        NavStep::Replaced {
            active: Some(label),
        } => format!("replaced (active: {label})"),
        NavStep::Replaced { active: None } => "replaced (no active entry)".to_string(),
        NavStep::BlockMissing => "block not found, skipped".to_string(),
    };
    vec![
        format!("{}Hamburger: {hamburger}", indent(1)),
        format!("{}Sidebar id: {sidebar}", indent(1)),
        format!("{}Navigation: {navigation}", indent(1)),
    ]
}

/// Closing lines after the whole batch: a blank separator and the notice.
pub fn format_completion(mode: Mode) -> Vec<String> {
    let notice = match mode {
        Mode::Write => "Batch update complete!",
        Mode::DryRun => "Check complete, no files written.",
    };
    vec![String::new(), notice.to_string()]
}

pub fn print_outcome(outcome: &FileOutcome, mode: Mode) {
    for line in format_outcome(outcome, mode) {
        println!("{}", line);
    }
}

pub fn print_completion(mode: Mode) {
    for line in format_completion(mode) {
        println!("{}", line);
    }
}
