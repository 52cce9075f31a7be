//! Shared test utilities for the page-updater test suite.
//!
//! Provides a pre-update page in the shape the portfolio pages had before the
//! hamburger menu existed, plus small read/write helpers for temp directories.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_page(tmp.path(), "contact.html", &legacy_page("Contact"));
//! // ... run the updater ...
//! let saved = read_page(tmp.path(), "contact.html");
//! ```

use std::path::Path;

/// A page before update: sidebar anchor, bare `<aside>`, old nav block.
pub fn legacy_page(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <div class="app-layout">
        <!-- Sidebar Navigation -->
        <aside class="sidebar">
            <div class="sidebar-header">Portfolio</div>
            <nav class="sidebar-nav">
                <ul>
                    <li><a href="index.html" class="old-link">Home</a></li>
                    <li><a href="contact.html" class="old-link">Contact</a></li>
                </ul>
            </nav>
        </aside>
        <main class="content">
            <h1>{title}</h1>
        </main>
    </div>
</body>
</html>
"#
    )
}

pub fn write_page(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

/// Read a page back. Panics with the path if it is missing.
pub fn read_page(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}
