//! Text rendering of a list as a chain of nodes.
//!
//! The default rendering draws every node as `( value ) -> ` and terminates
//! the chain with an explicit end marker, so a one-element list renders as
//! `( 1 ) -> null` rather than a bare value:
//!
//! ```
//! use singly::LinkedList;
//!
//! let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(list.to_string(), "( 1 ) -> ( 2 ) -> ( 3 ) -> null");
//! ```

use std::fmt;

use super::LinkedList;

/// Marker printed after the tail when no custom marker is configured.
pub const DEFAULT_END_MARKER: &str = "null";

/// Delimiters used when rendering a list.
///
/// # Examples
///
/// ```
/// use singly::{LinkedList, RenderOptions};
///
/// let list: LinkedList<&str> = ["a", "b"].into_iter().collect();
/// let options = RenderOptions::new()
///     .with_delimiters("[", "]")
///     .with_separator(" => ")
///     .with_end_marker("END");
///
/// assert_eq!(list.render(&options).to_string(), "[a] => [b] => END");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    open: String,
    close: String,
    separator: String,
    end_marker: String,
}

impl RenderOptions {
    /// Creates options that reproduce the `Display` output.
    pub fn new() -> Self {
        Self {
            open: "( ".to_string(),
            close: " )".to_string(),
            separator: " -> ".to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
        }
    }

    /// Sets the text written before and after each value.
    pub fn with_delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    /// Sets the link text written after each node.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the marker written in place of the tail's absent successor.
    ///
    /// An empty marker is replaced by [`DEFAULT_END_MARKER`]; the end of the
    /// chain must stay visible.
    pub fn with_end_marker(mut self, end_marker: impl Into<String>) -> Self {
        let end_marker = end_marker.into();
        self.end_marker = if end_marker.is_empty() {
            DEFAULT_END_MARKER.to_string()
        } else {
            end_marker
        };
        self
    }

    /// The marker written after the tail.
    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A list paired with rendering options, displayable with `{}`.
///
/// Created by [`LinkedList::render`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a, T> {
    list: &'a LinkedList<T>,
    options: &'a RenderOptions,
}

impl<'a, T> Rendered<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>, options: &'a RenderOptions) -> Self {
        Self { list, options }
    }
}

impl<T: fmt::Display> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.list, self.options)
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self, &RenderOptions::new())
    }
}

fn write_chain<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    list: &LinkedList<T>,
    options: &RenderOptions,
) -> fmt::Result {
    for value in list.iter() {
        write!(
            f,
            "{}{}{}{}",
            options.open, value, options.close, options.separator
        )?;
    }
    f.write_str(&options.end_marker)
}
