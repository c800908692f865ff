//! Batch conversion driver.
//!
//! Orchestrates one run end to end:
//!
//! ```text
//! stylesheet → discovery → destinations → navigation (optional)
//!            → per file: read → title → splice → render → write → preview
//! ```
//!
//! The stylesheet is fetched (best-effort) once, and the navigation block is
//! built once over the full document set, before any file is converted.
//!
//! ## Failure policy
//!
//! Configuration and discovery errors are fatal and happen before any
//! output is written. Per-file errors — an unreadable source, a failed
//! `mkdir`, a failed write — are reported, the file is skipped, and the
//! batch continues; the collected failures come back in the [`RunSummary`]
//! so the caller can exit non-zero after a complete pass.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::assets;
use crate::discover::{self, Document};
use crate::nav;
use crate::output::Reporter;
use crate::paths;
use crate::preview;
use crate::render::Renderer;
use crate::request::{ConversionRequest, Source};

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Discover(#[from] discover::DiscoverError),
}

/// Outcome of a complete batch pass.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub converted: usize,
    /// Source path and failure message for every skipped file.
    pub failed: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run a conversion request against the canonical stylesheet cache.
pub fn run(request: &ConversionRequest, reporter: &Reporter) -> Result<RunSummary, RunError> {
    let stylesheet = assets::stylesheet_path();
    assets::ensure_stylesheet(&stylesheet, request.force, reporter);
    convert_all(request, &stylesheet, reporter)
}

/// Convert every discovered document, linking `stylesheet` from each page.
/// Split out from [`run`] so tests can supply their own stylesheet path.
pub fn convert_all(
    request: &ConversionRequest,
    stylesheet: &Path,
    reporter: &Reporter,
) -> Result<RunSummary, RunError> {
    let sources = discover::discover(&request.source)?;
    let root = discovery_root(&request.source);

    let documents: Vec<Document> = sources
        .into_iter()
        .map(|source| {
            let destination = destination_for(&source, request, &root);
            Document { source, destination }
        })
        .collect();

    let navigation = request
        .navigation
        .then(|| nav::build_navigation(&documents, &root));

    let renderer = Renderer::new();
    let stylesheet_ref = stylesheet.to_string_lossy();

    let mut summary = RunSummary::default();
    for document in &documents {
        let outcome = convert_one(
            document,
            navigation.as_deref(),
            &renderer,
            &stylesheet_ref,
            request,
            reporter,
        );
        match outcome {
            Ok(()) => summary.converted += 1,
            Err(err) => {
                reporter.error(format!("{}: {}", document.source.display(), err));
                summary.failed.push((document.source.clone(), err.to_string()));
            }
        }
    }
    Ok(summary)
}

fn convert_one(
    document: &Document,
    navigation: Option<&str>,
    renderer: &Renderer,
    stylesheet_ref: &str,
    request: &ConversionRequest,
    reporter: &Reporter,
) -> Result<(), std::io::Error> {
    let name = document
        .source
        .file_name()
        .unwrap_or(document.source.as_os_str())
        .to_string_lossy();
    reporter.info(format!("Converting {name} to HTML..."));

    let text = fs::read_to_string(&document.source)?;
    let title = discover::extract_title(&text, &document.source);
    let body = match navigation {
        Some(block) => nav::splice(&text, block),
        None => text,
    };

    let html = renderer.render(&body, &title, stylesheet_ref, request.refresh);
    paths::ensure_parent_dir(&document.destination)?;
    fs::write(&document.destination, html)?;

    if request.preview {
        reporter.info(format!(
            "Opening {} in browser...",
            document.destination.display()
        ));
        if let Err(err) = preview::open(&document.destination) {
            reporter.warn(format!("unable to open browser: {err}"));
        }
    }
    Ok(())
}

/// The root against which navigation depth and destination mapping are
/// computed: the directory itself, or the single file's parent.
fn discovery_root(source: &Source) -> PathBuf {
    match source {
        Source::File(path) => path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf(),
        Source::Directory(root) => root.clone(),
    }
}

fn destination_for(source: &Path, request: &ConversionRequest, root: &Path) -> PathBuf {
    match (&request.source, &request.output) {
        (Source::File(_), Some(out)) => out.clone(),
        (Source::File(_), None) => paths::fallback_destination(source),
        // Without an output root, directory mode converts in place.
        (Source::Directory(_), Some(out)) => paths::map_destination(source, root, out),
        (Source::Directory(_), None) => paths::map_destination(source, root, root),
    }
}
