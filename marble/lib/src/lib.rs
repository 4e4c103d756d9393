//! Pure string builders for Markdown.
//!
//! Every function takes plain text (plus the occasional option) and returns a
//! Markdown-formatted string. Nothing is parsed, validated or rendered; the
//! functions are stateless and safe to call from any thread.
//!
//! ## Modules
//!
//! - [`escape`] - Backslash-escaping of Markdown syntax characters
//! - [`inline`] - Emphasis, strikethrough, inline/fenced code, links and images
//! - [`block`] - Block quotes, ordered/unordered lists and horizontal rules
//! - [`header`] - ATX headers (`#` through `######`)
//! - [`ext`] - [`MarkdownExt`], the same operations as methods on `str`
//!
//! ## Examples
//!
//! ```
//! use marble::{MarkdownExt, escape, link};
//!
//! assert_eq!(
//!     link(&escape("#RubyGems"), "https://rubygems.org/"),
//!     "[\\#RubyGems](https://rubygems.org/)"
//! );
//!
//! // Layers wrap the previous result in call order
//! assert_eq!(
//!     "Marble!".escape().bold().strikethrough().italic(),
//!     "*~~**Marble\\!**~~*"
//! );
//! ```

pub mod block;
pub mod error;
pub mod escape;
pub mod ext;
pub mod header;
pub mod inline;

pub use block::{
    hr, horizontal_rule, ol, ordered_list, ordered_list_from, quote, ul, unordered_list,
};
pub use error::{MarbleError, Result};
pub use escape::{ESCAPED, RESERVED, escape};
pub use ext::MarkdownExt;
pub use header::{HeaderLevel, h1, h2, h3, h4, h5, h6, header};
pub use inline::{bold, code, image, italic, italics, link, strike, strikethrough};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
