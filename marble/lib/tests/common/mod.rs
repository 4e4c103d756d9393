//! Common test utilities for rendering generated Markdown.
//!
//! The renderer is a black box: generated Markdown goes in, HTML comes out,
//! and tests compare the HTML against what each construct should produce.

use pulldown_cmark::{Options, Parser, html};

/// Renders `markdown` to HTML with strikethrough enabled.
///
/// Fenced code blocks are part of CommonMark and need no extra option.
///
/// ## Examples
///
/// ```no_run
/// assert_eq!(render("**x**"), "<p><strong>x</strong></p>\n");
/// ```
pub fn render(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
