//! Markdown file discovery and title extraction.
//!
//! Single-file mode yields exactly the given path, after checking it is a
//! regular file. Directory mode walks the whole tree and yields every file
//! whose name ends in the `.md` suffix — the match is case-sensitive, so
//! `README.MD` is skipped. Entries are visited in sorted filename order to
//! keep the discovery sequence (and therefore navigation and output order)
//! stable across platforms and re-runs.
//!
//! ## Titles
//!
//! A document's title is the text of its first `# ` heading line. When no
//! such line exists the file stem is used instead. The fallback applies in
//! both modes; a heading-less document is never an error.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::request::Source;

pub const MARKDOWN_SUFFIX: &str = ".md";

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("no such file: {0}")]
    FileNotFound(PathBuf),
    #[error("no such directory: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A discovered document with its computed output path.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Produce the ordered set of Markdown files to convert.
pub fn discover(source: &Source) -> Result<Vec<PathBuf>, DiscoverError> {
    match source {
        Source::File(path) => {
            if !path.is_file() {
                return Err(DiscoverError::FileNotFound(path.clone()));
            }
            Ok(vec![path.clone()])
        }
        Source::Directory(root) => {
            if !root.is_dir() {
                return Err(DiscoverError::DirectoryNotFound(root.clone()));
            }
            let mut found = Vec::new();
            for entry in WalkDir::new(root).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() && is_markdown(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            Ok(found)
        }
    }
}

fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(MARKDOWN_SUFFIX))
        .unwrap_or(false)
}

/// Extract the document title: first `# heading` line, else the file stem.
pub fn extract_title(text: &str, source: &Path) -> String {
    text.lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
        .unwrap_or_else(|| {
            source
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn single_file_yields_that_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.md");
        fs::write(&path, "# Notes").unwrap();

        let found = discover(&Source::File(path.clone())).unwrap();
        assert_eq!(found, vec![path]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = discover(&Source::File(PathBuf::from("/no/such/file.md")));
        assert!(matches!(result, Err(DiscoverError::FileNotFound(_))));
    }

    #[test]
    fn directory_pointing_nowhere_is_not_found() {
        let result = discover(&Source::Directory(PathBuf::from("/no/such/dir")));
        assert!(matches!(result, Err(DiscoverError::DirectoryNotFound(_))));
    }

    #[test]
    fn walk_finds_nested_markdown() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "# A").unwrap();
        fs::create_dir_all(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/b.md"), "# B").unwrap();
        fs::write(tmp.path().join("sub/skip.txt"), "not markdown").unwrap();

        let found = discover(&Source::Directory(tmp.path().to_path_buf())).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("a.md"));
        assert!(found[1].ends_with("sub/b.md"));
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("README.MD"), "# Shouting").unwrap();
        fs::write(tmp.path().join("readme.md"), "# Quiet").unwrap();

        let found = discover(&Source::Directory(tmp.path().to_path_buf())).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("readme.md"));
    }

    #[test]
    fn discovery_order_is_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zebra.md"), "# Z").unwrap();
        fs::write(tmp.path().join("apple.md"), "# A").unwrap();
        fs::write(tmp.path().join("mango.md"), "# M").unwrap();

        let found = discover(&Source::Directory(tmp.path().to_path_buf())).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["apple.md", "mango.md", "zebra.md"]);
    }

    // =========================================================================
    // Title extraction
    // =========================================================================

    #[test]
    fn title_from_first_heading() {
        let title = extract_title("# Hello\n\nWorld", Path::new("doc.md"));
        assert_eq!(title, "Hello");
    }

    #[test]
    fn title_skips_non_heading_lines() {
        let text = "intro paragraph\n\n# Real Title\n\n# Second";
        assert_eq!(extract_title(text, Path::new("doc.md")), "Real Title");
    }

    #[test]
    fn title_ignores_deeper_headings() {
        let text = "## Not this\n\n### Nor this";
        assert_eq!(extract_title(text, Path::new("notes.md")), "notes");
    }

    #[test]
    fn title_falls_back_to_stem() {
        assert_eq!(
            extract_title("no headings here", Path::new("docs/getting-started.md")),
            "getting-started"
        );
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(
            extract_title("#  Padded Title  \n", Path::new("doc.md")),
            "Padded Title"
        );
    }
}
