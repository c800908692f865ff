//! Cross-document navigation generation.
//!
//! When navigation is requested, one Markdown list linking every discovered
//! document is built up front and reused for every page in the run. Each
//! list line is indented four spaces per directory level below the discovery
//! root, so the rendered list mirrors the tree:
//!
//! ```text
//! ### Project Links
//! * [docs](file:///out/a.html)
//!     * [sub](file:///out/sub/b.html)
//! ```
//!
//! The block is spliced into a document by substituting the literal
//! `### Project Links` heading in its body. Documents without the
//! placeholder pass through unchanged, and the discovered source text is
//! never mutated — [`splice`] returns a new body for rendering.
//!
//! Depth and labels are computed from path components via
//! [`Path::strip_prefix`], not by counting separator-split segments, so
//! platform separator differences cannot skew the nesting.

use std::path::Path;

use crate::discover::Document;
use crate::paths;

/// Heading that both opens the generated block and marks the splice point.
pub const NAV_PLACEHOLDER: &str = "### Project Links";

/// One navigation list line, derived from a discovered document.
#[derive(Debug, PartialEq)]
pub struct NavigationEntry {
    /// Containing directory name; the root's own name for root-level files.
    pub label: String,
    /// `file://` reference to the document's destination.
    pub target: String,
    /// Directory nesting below the discovery root. Root level is 0.
    pub depth: usize,
}

/// Build the navigation block for the whole document set, newline-terminated.
pub fn build_navigation(documents: &[Document], root: &Path) -> String {
    let mut block = String::from(NAV_PLACEHOLDER);
    block.push('\n');
    for document in documents {
        let entry = entry_for(document, root);
        block.push_str(&"    ".repeat(entry.depth));
        block.push_str(&format!("* [{}]({})\n", entry.label, entry.target));
    }
    block
}

/// Substitute the placeholder heading with the generated block. No-op when
/// the body has no placeholder.
pub fn splice(body: &str, block: &str) -> String {
    body.replace(NAV_PLACEHOLDER, block.trim_end())
}

fn entry_for(document: &Document, root: &Path) -> NavigationEntry {
    let dir = document.source.parent().unwrap_or(root);
    let depth = dir
        .strip_prefix(root)
        .map(|relative| relative.components().count())
        .unwrap_or(0);

    let label_dir = if depth == 0 { root } else { dir };
    let label = label_dir
        .file_name()
        .unwrap_or(label_dir.as_os_str())
        .to_string_lossy()
        .to_string();

    NavigationEntry {
        label,
        target: paths::file_url(&document.destination),
        depth,
    }
}
