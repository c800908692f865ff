//! CLI reporting.
//!
//! A [`Reporter`] is constructed once from the quiet flag and passed into
//! every component that talks to the user. There is no global logger and no
//! module-level configuration: verbosity is decided in one place and carried
//! by value.
//!
//! Three levels:
//!
//! - `info` — progress lines ("Converting a.md to HTML..."), stdout,
//!   suppressed under quiet mode
//! - `warn` — degraded-but-continuing conditions (stylesheet fetch failed),
//!   stderr, always visible
//! - `error` — per-file or fatal failures, stderr, always visible

use colored::Colorize;

/// Explicitly injected reporting interface. Cheap to copy around.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Progress information. Silent under quiet mode.
    pub fn info(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }

    /// Non-fatal degradation. Always visible.
    pub fn warn(&self, message: impl AsRef<str>) {
        eprintln!("{} {}", "warning:".yellow().bold(), message.as_ref());
    }

    /// Failure. Always visible.
    pub fn error(&self, message: impl AsRef<str>) {
        eprintln!("{} {}", "error:".red().bold(), message.as_ref());
    }
}
