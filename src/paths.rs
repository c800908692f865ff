//! Destination path computation.
//!
//! Maps every discovered Markdown source path to its output HTML path:
//! the source-root prefix is swapped for the destination root and the
//! extension for `.html`, preserving the relative subdirectory structure.
//!
//! Both operations are structural — [`Path::strip_prefix`] and
//! [`Path::with_extension`] — never substring replacement. A path like
//! `notes/mdbook/amd.md` contains the extension characters in places a
//! string search would corrupt; component-wise rewriting cannot touch them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const HTML_EXTENSION: &str = "html";

/// Compute the output path for `source` by re-rooting it from `source_root`
/// to `dest_root` and swapping the extension for `.html`.
///
/// A source outside `source_root` (should not happen for discovered files)
/// keeps its own path shape under `dest_root`.
pub fn map_destination(source: &Path, source_root: &Path, dest_root: &Path) -> PathBuf {
    let relative = source.strip_prefix(source_root).unwrap_or(source);
    dest_root.join(relative).with_extension(HTML_EXTENSION)
}

/// Default single-file destination when no output path was requested:
/// `<system temp dir>/<source stem>.html`.
pub fn fallback_destination(source: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or(source.as_os_str());
    std::env::temp_dir().join(stem).with_extension(HTML_EXTENSION)
}

/// Create the destination's parent directories. Existing directories are
/// not an error.
pub fn ensure_parent_dir(dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// A `file://` reference for a written page, with separators normalized to
/// forward slashes so hrefs stay portable.
pub fn file_url(path: &Path) -> String {
    let flat = path.to_string_lossy().replace('\\', "/");
    format!("file://{flat}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn destination_preserves_subdirectories() {
        let dest = map_destination(
            Path::new("/root/a/b/c.md"),
            Path::new("/root"),
            Path::new("/out"),
        );
        assert_eq!(dest, PathBuf::from("/out/a/b/c.html"));
    }

    #[test]
    fn destination_at_root_level() {
        let dest = map_destination(
            Path::new("docs/readme.md"),
            Path::new("docs"),
            Path::new("html"),
        );
        assert_eq!(dest, PathBuf::from("html/readme.html"));
    }

    #[test]
    fn md_inside_directory_names_survives() {
        // "md" occurring anywhere but the extension must not be rewritten.
        let dest = map_destination(
            Path::new("/src/mdbook/amd.md"),
            Path::new("/src"),
            Path::new("/out"),
        );
        assert_eq!(dest, PathBuf::from("/out/mdbook/amd.html"));
    }

    #[test]
    fn same_roots_convert_in_place() {
        let dest = map_destination(
            Path::new("docs/sub/b.md"),
            Path::new("docs"),
            Path::new("docs"),
        );
        assert_eq!(dest, PathBuf::from("docs/sub/b.html"));
    }

    #[test]
    fn fallback_lands_in_temp_dir() {
        let dest = fallback_destination(Path::new("/somewhere/notes.md"));
        assert_eq!(dest, std::env::temp_dir().join("notes.html"));
    }

    #[test]
    fn parent_dirs_created_on_demand() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("a/b/c.html");
        ensure_parent_dir(&dest).unwrap();
        assert!(dest.parent().unwrap().is_dir());
    }

    #[test]
    fn existing_parent_dir_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("page.html");
        ensure_parent_dir(&dest).unwrap();
        ensure_parent_dir(&dest).unwrap();
    }

    #[test]
    fn file_url_uses_forward_slashes() {
        assert_eq!(file_url(Path::new("/out/a.html")), "file:///out/a.html");
    }
}
