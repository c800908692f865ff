//! Run configuration.
//!
//! A [`ConversionRequest`] is the resolved configuration for one invocation:
//! exactly one input mode (a single Markdown file, or a directory root to
//! walk), an optional output target, and the behavior flags. It is built once
//! from CLI arguments and immutable afterwards.
//!
//! Mode selection is validated here rather than by the argument parser, so
//! that a misconfigured invocation always takes the same path: a
//! [`RequestError`], an error line, and exit code 1 before any work happens.

use std::num::NonZeroU32;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RequestError {
    #[error("no input given: pass a Markdown file or --dir <DIR>")]
    MissingSource,
    #[error("a Markdown file and --dir are mutually exclusive")]
    ConflictingSources,
}

/// What to convert: one file, or every `.md` file under a directory root.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Directory(PathBuf),
}

impl Source {
    /// Resolve the two optional CLI inputs into exactly one mode.
    pub fn resolve(
        file: Option<PathBuf>,
        dir: Option<PathBuf>,
    ) -> Result<Self, RequestError> {
        match (file, dir) {
            (Some(_), Some(_)) => Err(RequestError::ConflictingSources),
            (Some(file), None) => Ok(Source::File(file)),
            (None, Some(dir)) => Ok(Source::Directory(dir)),
            (None, None) => Err(RequestError::MissingSource),
        }
    }
}

/// Resolved configuration for a single run.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source: Source,
    /// Output file (file mode) or output root (directory mode). `None` falls
    /// back to a temp-dir file, or to converting in place, respectively.
    pub output: Option<PathBuf>,
    /// Re-download the cached stylesheet even if present.
    pub force: bool,
    /// Open each written page with the platform's default handler.
    pub preview: bool,
    /// Meta-refresh interval in seconds. Positivity lives in the type.
    pub refresh: Option<NonZeroU32>,
    /// Generate and splice the cross-document navigation block.
    pub navigation: bool,
    /// Suppress informational output. Warnings and errors stay visible.
    pub quiet: bool,
}
