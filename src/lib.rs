//! # Page Updater
//!
//! Batch editor for a hand-written static portfolio site. For each page in a
//! fixed list it adds the hamburger menu fragment, gives the sidebar its id,
//! and swaps the sidebar navigation for a freshly generated block with the
//! current page's link marked active.
//!
//! ```text
//! for page in files:
//!     load → insert hamburger → add sidebar id → replace nav → save → report
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`update`] | The per-page edit steps, per-page outcomes, and the batch loop |
//! | [`nav`] | Navigation block rendering and active-link marking |
//! | [`config`] | Stock markup constants, `page-updater.toml` overrides, validation |
//! | [`types`] | `NavLink`, shared by config and navigation rendering |
//! | [`output`] | CLI output formatting for per-page and completion lines |
//!
//! # Design Decisions
//!
//! ## Text Substitution, Not a DOM
//!
//! Pages are edited as strings: literal find/replace for the fragment and the
//! sidebar tag, one non-greedy regex for the nav block. Pages that lack an
//! anchor simply skip that step. Parsing into a tree would normalize markup
//! the edits never touch, so the textual contract is kept as is.
//!
//! ## Idempotent Runs
//!
//! The fragment is gated on a marker, the sidebar rewrite cannot match its own
//! output, and the nav block is rendered from the config on every run. Running
//! the tool twice leaves pages byte-identical to running it once.
//!
//! ## Failures Stay Per Page
//!
//! A missing or unreadable page is reported and skipped. The batch always
//! reaches the end of the list and prints the completion notice.

pub mod config;
pub mod nav;
pub mod output;
pub mod types;
pub mod update;

#[cfg(test)]
pub(crate) mod test_helpers;
