//! Backslash-escaping of Markdown syntax.
//!
//! A closed set of twelve characters is reserved by Markdown syntax. [`escape`]
//! inserts a backslash in front of each of them so that they render literally.
//!
//! ## Design
//!
//! The table and a single alternation pattern over its keys are built once,
//! on first use. Escaping is one leftmost-to-rightmost `replace_all` pass with
//! non-overlapping matches, so inserted backslashes are never re-scanned.
//! Text without any reserved character is returned borrowed.

use std::borrow::Cow;
use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

/// Characters that carry meaning in Markdown syntax and are escaped by [`escape`].
pub const RESERVED: [char; 12] = ['!', '#', '(', ')', '*', '[', '\\', ']', '_', '`', '|', '~'];

lazy_static! {
    /// Each reserved character mapped to its backslash-escaped form.
    pub static ref ESCAPED: HashMap<char, String> = RESERVED
        .iter()
        .map(|&c| (c, format!("\\{c}")))
        .collect();

    /// Matches any single key of [`ESCAPED`].
    static ref TO_ESCAPE: Regex = {
        let alternation = ESCAPED
            .keys()
            .map(|c| regex::escape(&c.to_string()))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).expect("alternation of escaped literals is a valid pattern")
    };
}

/// Escapes all Markdown syntax characters in `text`.
///
/// Every occurrence of a [`RESERVED`] character is replaced by its two-character
/// form from [`ESCAPED`]; all other characters pass through unchanged.
/// Returns `Cow::Borrowed` when nothing needed escaping.
///
/// ## Examples
///
/// ```
/// use marble::escape;
///
/// assert_eq!(escape("Marble!"), "Marble\\!");
/// assert_eq!(escape("[link](url)"), "\\[link\\]\\(url\\)");
///
/// // Plain text is returned as-is
/// assert!(matches!(escape("plain"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    // A literal backslash followed by the whole match, i.e. the ESCAPED value
    let escaped = TO_ESCAPE.replace_all(text, r"\$0");

    // Each escape inserts exactly one ASCII byte
    let count = escaped.len() - text.len();
    if count > 0 {
        trace!(count, "escaped markdown syntax");
    }

    escaped
}
