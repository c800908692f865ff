//! Stylesheet caching.
//!
//! Pages link the `github-markdown.css` stylesheet from a per-user cache
//! location, downloaded on first use and reused by every later run. The
//! fetch is strictly best-effort: any network or filesystem failure is
//! reported as a warning and the run continues — a missing stylesheet
//! degrades visual styling only, never conversion. Code highlighting is
//! unaffected either way since it uses inline styles.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::output::Reporter;

/// Upstream location of the GitHub Markdown stylesheet.
pub const STYLESHEET_URL: &str = "https://raw.githubusercontent.com/sindresorhus/github-markdown-css/gh-pages/github-markdown.css";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the cached stylesheet lives: `<user cache dir>/mdpage/`, with the
/// system temp dir standing in on platforms without a cache dir.
pub fn stylesheet_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mdpage")
        .join("github-markdown.css")
}

/// Make sure a stylesheet exists at `target`, downloading it when absent or
/// when `force` is set. Failures warn and return — never abort the run.
pub fn ensure_stylesheet(target: &Path, force: bool, reporter: &Reporter) {
    ensure_stylesheet_from(STYLESHEET_URL, target, force, reporter);
}

pub(crate) fn ensure_stylesheet_from(
    url: &str,
    target: &Path,
    force: bool,
    reporter: &Reporter,
) {
    if !force && target.is_file() {
        return;
    }
    reporter.info("Downloading github-markdown.css...");
    if let Err(err) = fetch(url, target) {
        reporter.warn(format!("unable to download stylesheet: {err}"));
    }
}

fn fetch(url: &str, target: &Path) -> Result<(), AssetError> {
    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let body = client.get(url).send()?.error_for_status()?.bytes()?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, &body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fetch_writes_body_and_creates_parents() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/github-markdown.css")
            .with_status(200)
            .with_body(".markdown-body { color: #24292e; }")
            .create();

        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("cache/mdpage/github-markdown.css");
        let url = format!("{}/github-markdown.css", server.url());

        fetch(&url, &target).unwrap();

        mock.assert();
        let written = fs::read_to_string(&target).unwrap();
        assert!(written.contains(".markdown-body"));
    }

    #[test]
    fn http_error_status_is_an_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/github-markdown.css")
            .with_status(500)
            .create();

        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("github-markdown.css");
        let url = format!("{}/github-markdown.css", server.url());

        assert!(fetch(&url, &target).is_err());
        assert!(!target.exists());
    }

    #[test]
    fn existing_file_short_circuits() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("github-markdown.css");
        fs::write(&target, "cached").unwrap();

        // Unroutable URL: reaching the network here would fail the test.
        let reporter = Reporter::new(true);
        ensure_stylesheet_from("http://127.0.0.1:1/css", &target, false, &reporter);

        assert_eq!(fs::read_to_string(&target).unwrap(), "cached");
    }

    #[test]
    fn force_refetches_over_existing_file() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/github-markdown.css")
            .with_status(200)
            .with_body("fresh")
            .create();

        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("github-markdown.css");
        fs::write(&target, "stale").unwrap();

        let reporter = Reporter::new(true);
        let url = format!("{}/github-markdown.css", server.url());
        ensure_stylesheet_from(&url, &target, true, &reporter);

        assert_eq!(fs::read_to_string(&target).unwrap(), "fresh");
    }

    #[test]
    fn fetch_failure_never_panics_or_aborts() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("github-markdown.css");

        let reporter = Reporter::new(true);
        ensure_stylesheet_from("http://127.0.0.1:1/css", &target, false, &reporter);

        // Warned and returned; nothing written, nothing raised.
        assert!(!target.exists());
    }
}
