//! Formatting shortcuts as methods on `str`.
//!
//! [`MarkdownExt`] is implemented for `str`, so its methods are available on
//! `&str`, `String` and the `Cow<str>` returned by [`escape`](crate::escape)
//! through auto-deref. Methods chain; each layer wraps the previous result.
//!
//! ```
//! use marble::MarkdownExt;
//!
//! assert_eq!("Marble!".escape().bold().strikethrough().italic(), "*~~**Marble\\!**~~*");
//! assert_eq!(
//!     format!("I am {} and I am {}!", "bold".bold(), "italic".italic()),
//!     "I am **bold** and I am *italic*!"
//! );
//! ```

use std::borrow::Cow;

use crate::{escape, inline};

/// The most common formatting operations as extension methods.
pub trait MarkdownExt {
    /// This text with all Markdown syntax escaped.
    fn escape(&self) -> Cow<'_, str>;

    /// Embolden this text.
    fn bold(&self) -> String;

    /// Display this text as inline code.
    fn code(&self) -> String;

    /// Italicise this text.
    fn italic(&self) -> String;

    /// Alias of [`italic`](MarkdownExt::italic).
    fn italics(&self) -> String {
        self.italic()
    }

    /// Strike out this text.
    fn strikethrough(&self) -> String;

    /// Alias of [`strikethrough`](MarkdownExt::strikethrough).
    fn strike(&self) -> String {
        self.strikethrough()
    }

    /// Create a link using this text as the link text.
    fn link(&self, url: &str) -> String;
}

impl MarkdownExt for str {
    fn escape(&self) -> Cow<'_, str> {
        escape::escape(self)
    }

    fn bold(&self) -> String {
        inline::bold(self)
    }

    fn code(&self) -> String {
        inline::code(self, None)
    }

    fn italic(&self) -> String {
        inline::italic(self)
    }

    fn strikethrough(&self) -> String {
        inline::strikethrough(self)
    }

    fn link(&self, url: &str) -> String {
        inline::link(self, url)
    }
}
