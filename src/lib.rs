//! # mdpage
//!
//! Convert GitHub Flavored Markdown files to standalone, styled HTML pages.
//! One file or a whole directory tree; each page links the cached
//! `github-markdown.css` stylesheet and highlights fenced code blocks with
//! inline styles, so a page stays readable even when the stylesheet never
//! downloaded.
//!
//! # Pipeline
//!
//! A run is a single sequential pass:
//!
//! ```text
//! stylesheet cache → discover .md files → map destinations
//!                  → build navigation (optional, once)
//!                  → per file: read → title → splice → render → write
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`request`] | Resolved run configuration, input-mode validation |
//! | [`assets`] | Cached stylesheet, best-effort download |
//! | [`discover`] | Markdown file discovery and title extraction |
//! | [`paths`] | Source → destination path mapping |
//! | [`nav`] | Cross-document navigation list generation and splicing |
//! | [`render`] | Markdown → complete HTML page, syntax highlighting |
//! | [`convert`] | Batch driver: orchestration and failure policy |
//! | [`preview`] | Open written pages with the platform handler |
//! | [`output`] | Injected `info`/`warn`/`error` reporting |
//!
//! # Design Decisions
//!
//! ## Structural path mapping
//!
//! Destinations are computed with `strip_prefix` and `with_extension`,
//! never by string replacement — a path like `notes/mdbook/amd.md` maps to
//! `out/mdbook/amd.html` with every non-extension `md` intact.
//!
//! ## Two-phase navigation
//!
//! Navigation is derived from the immutable discovered set (paths and
//! destinations only) before any file is read, then spliced into each body
//! by placeholder substitution on the way into the renderer. Source records
//! are never edited in place.
//!
//! ## Skip-and-continue batches
//!
//! A file that fails to read or write is reported and skipped; the batch
//! finishes and exits non-zero if anything failed. Only configuration and
//! discovery errors abort up front.
//!
//! ## Inline-style highlighting
//!
//! Fenced code blocks are highlighted through syntect into inline span
//! styles. Highlighting therefore has no dependency on the downloaded
//! stylesheet, which is itself best-effort by design.

pub mod assets;
pub mod convert;
pub mod discover;
pub mod nav;
pub mod output;
pub mod paths;
pub mod preview;
pub mod render;
pub mod request;
