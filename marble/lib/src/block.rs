//! Block-level Markdown: quotes, lists and horizontal rules.
//!
//! List builders emit one line per item and terminate every line, including
//! the last, with a newline. Callers embedding a list inline must account for
//! that trailing newline.

/// Default first number of an ordered list.
pub const DEFAULT_LIST_START: usize = 1;

/// Quotes `text` as a single-line block quote.
///
/// Multi-line input is not treated specially; only the first line is prefixed.
pub fn quote(text: &str) -> String {
    format!("> {text}")
}

/// Creates an ordered list numbered from 1.
///
/// ## Examples
///
/// ```
/// assert_eq!(marble::ordered_list(["a", "b", "c"]), "1.   a\n2.   b\n3.   c\n");
/// ```
pub fn ordered_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ordered_list_from(items, DEFAULT_LIST_START)
}

/// Creates an ordered list whose first item is numbered `start`.
///
/// Numbers are computed as `u128`, so a list starting near `usize::MAX` keeps
/// counting past it instead of overflowing.
///
/// ## Examples
///
/// ```
/// assert_eq!(marble::ordered_list_from(["a", "b"], 5), "5.   a\n6.   b\n");
/// ```
pub fn ordered_list_from<I>(items: I, start: usize) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let n = start as u128 + i as u128;
            format!("{n}.   {}\n", item.as_ref())
        })
        .collect()
}

/// Alias of [`ordered_list`].
pub fn ol<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ordered_list(items)
}

/// Creates an unordered list, keeping the iteration order of `items`.
///
/// ## Examples
///
/// ```
/// assert_eq!(marble::unordered_list(["a", "b"]), "-   a\n-   b\n");
/// ```
pub fn unordered_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("-   {}\n", item.as_ref()))
        .collect()
}

/// Alias of [`unordered_list`].
pub fn ul<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    unordered_list(items)
}

/// Returns a horizontal rule.
pub fn horizontal_rule() -> &'static str {
    "---"
}

/// Alias of [`horizontal_rule`].
pub fn hr() -> &'static str {
    horizontal_rule()
}
