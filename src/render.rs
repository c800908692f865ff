//! HTML page rendering.
//!
//! Converts one Markdown text blob into a complete HTML document string.
//! The Markdown → HTML body transformation is delegated to
//! [pulldown-cmark](https://docs.rs/pulldown-cmark); fenced code blocks with
//! a recognized language token are intercepted and replaced with
//! syntect-highlighted HTML carrying inline span styles, so highlighting
//! works even when the linked stylesheet is missing.
//!
//! The full page is assembled with [maud](https://maud.lambda.xyz/):
//! auto-escaped title, optional refresh meta tag, stylesheet link, and the
//! rendered body inside a centered `.markdown-body` container.
//!
//! ## Extension set
//!
//! Tables and CommonMark-strict list semantics are always on. The `gfm`
//! feature (default) additionally enables strikethrough, task lists,
//! footnotes, math, and smart punctuation; built without it, the renderer
//! degrades to the baseline set and `~~text~~` stays literal.
//!
//! Rendering is a pure function of its inputs: no I/O, no side effects,
//! byte-identical output for identical input and options.

use std::num::NonZeroU32;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html as md_html};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Fixed styling for the content container, matching the GitHub reading
/// width.
const PAGE_CSS: &str = "\
.markdown-body {
  border: 1px solid #ddd;
  border-radius: 3px;
  max-width: 888px;
  margin: 64px auto 51px;
  padding: 45px;
}";

/// Markdown-to-page renderer. Loads the syntax and theme definitions once;
/// construct it per run and reuse it for every document.
pub struct Renderer {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// # Panics
    ///
    /// Panics if the default theme set of `syntect` does not contain
    /// "InspiredGitHub".
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let theme = ThemeSet::load_defaults()
            .themes
            .remove("InspiredGitHub")
            .expect("default theme set should include \"InspiredGitHub\"");
        Self { syntaxes, theme }
    }

    /// Render a Markdown document into a standalone HTML page.
    pub fn render(
        &self,
        text: &str,
        title: &str,
        stylesheet_ref: &str,
        refresh: Option<NonZeroU32>,
    ) -> String {
        let body = self.markdown_body(text);
        page(title, stylesheet_ref, refresh, &body).into_string()
    }

    /// Markdown → HTML body, with fenced code blocks routed through the
    /// highlighter.
    fn markdown_body(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, markdown_options());

        let mut events: Vec<Event> = Vec::new();
        // (language token, accumulated block text) while inside a code block
        let mut code: Option<(String, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let language = match &kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .unwrap_or_default()
                            .to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    code = Some((language, String::new()));
                }
                Event::Text(chunk) if code.is_some() => {
                    if let Some((_, buffer)) = code.as_mut() {
                        buffer.push_str(&chunk);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    let Some((language, buffer)) = code.take() else {
                        continue;
                    };
                    match self.highlight(&buffer, &language) {
                        Some(highlighted) => {
                            events.push(Event::Html(CowStr::from(highlighted)));
                        }
                        None => {
                            // No syntax for this token: plain escaped block.
                            events.push(Event::Start(Tag::CodeBlock(
                                CodeBlockKind::Fenced(CowStr::from(language)),
                            )));
                            events.push(Event::Text(CowStr::from(buffer)));
                            events.push(Event::End(TagEnd::CodeBlock));
                        }
                    }
                }
                other => events.push(other),
            }
        }

        let mut body = String::new();
        md_html::push_html(&mut body, events.into_iter());
        body
    }

    /// Highlight a code block with inline span styles. `None` when the
    /// language token is empty or unrecognized.
    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        if language.is_empty() {
            return None;
        }
        let syntax = self.syntaxes.find_syntax_by_token(language)?;
        let highlighted =
            highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme).ok()?;
        Some(strip_pre_style(&highlighted))
    }
}

fn markdown_options() -> Options {
    #[allow(unused_mut)]
    let mut options = Options::ENABLE_TABLES;
    #[cfg(feature = "gfm")]
    {
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_MATH);
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
    }
    options
}

/// Drop the highlighter's inline style from the wrapping `<pre>` tag. Span
/// colors stay inline; block chrome belongs to the page stylesheet.
fn strip_pre_style(highlighted: &str) -> String {
    if let Some(rest) = highlighted.strip_prefix("<pre style=\"")
        && let Some(end) = rest.find('>')
    {
        return format!("<pre>{}", &rest[end + 1..]);
    }
    highlighted.to_string()
}

/// The fixed page template. Everything user-controlled is escaped by maud;
/// the body is pre-rendered HTML and passes through as-is.
fn page(title: &str, stylesheet_ref: &str, refresh: Option<NonZeroU32>, body: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                @if let Some(interval) = refresh {
                    meta http-equiv="refresh" content=(interval.get());
                }
                title { (title) }
                link rel="stylesheet" href=(stylesheet_ref);
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                article.markdown-body {
                    (PreEscaped(body))
                }
            }
        }
    }
}
