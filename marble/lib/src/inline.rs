//! Inline Markdown: emphasis, strikethrough, code, links and images.
//!
//! None of these functions escape their input. Run text through
//! [`escape`](crate::escape) first when it may contain Markdown syntax.

/// Wraps `text` in double asterisks.
///
/// ## Examples
///
/// ```
/// assert_eq!(marble::bold("To go boldly"), "**To go boldly**");
/// ```
pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

/// Wraps `text` in single asterisks.
///
/// ## Examples
///
/// ```
/// assert_eq!(marble::italic("Emphasis"), "*Emphasis*");
/// ```
pub fn italic(text: &str) -> String {
    format!("*{text}*")
}

/// Alias of [`italic`].
pub fn italics(text: &str) -> String {
    italic(text)
}

/// Wraps `text` in double tildes.
///
/// ## Examples
///
/// ```
/// assert_eq!(marble::strikethrough("Delete this"), "~~Delete this~~");
/// ```
pub fn strikethrough(text: &str) -> String {
    format!("~~{text}~~")
}

/// Alias of [`strikethrough`].
pub fn strike(text: &str) -> String {
    strikethrough(text)
}

/// Formats `text` as code.
///
/// With no `language` the result is inline code in single backticks. Any
/// `language`, including the empty string, produces a fenced block: an empty
/// tag gives a fence without syntax highlighting.
///
/// ## Examples
///
/// ```
/// use marble::code;
///
/// assert_eq!(code("x", None), "`x`");
/// assert_eq!(code("x", Some("")), "```\nx\n```");
/// assert_eq!(code("x", Some("ruby")), "```ruby\nx\n```");
/// ```
pub fn code(text: &str, language: Option<&str>) -> String {
    match language {
        None => format!("`{text}`"),
        Some(language) => format!("```{language}\n{text}\n```"),
    }
}

/// Creates a link with `text` pointing at `url`.
///
/// Neither argument is escaped or validated.
pub fn link(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

/// Creates an image with the given alt text.
pub fn image(alt_text: &str, url: &str) -> String {
    format!("![{alt_text}]({url})")
}
