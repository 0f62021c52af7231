//!
//! Singly: a singly linked list built from exclusively owned nodes.
//!
//! ## Core Concepts
//!
//! * **Nodes (`list::Node`)**: A value plus ownership of the next node, or nothing at the tail.
//! * **Lists (`list::LinkedList`)**: Ownership of the head node and every list operation: insertion at either end, positional insert/remove, lookup by index or value, size, and rendering.
//! * **Sentinel results**: Out-of-range indices and empty lists never panic. Positional operations become no-ops that report `None`, while the `try_*` variants return a [`ListError`].
//! * **Rendering (`list::render`)**: Lists display as `( v0 ) -> ( v1 ) -> null`, with [`RenderOptions`] to change the delimiters or end marker.
//!
//! ```
//! use singly::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.append("b");
//! list.prepend("a");
//!
//! assert!(list.contains(&"b"));
//! assert_eq!(list.find(&"b"), Some(1));
//! assert_eq!(list.to_string(), "( a ) -> ( b ) -> null");
//! ```

pub mod list;

/// Re-export the list types for easier access.
pub use list::{LinkedList, ListError, Node, RenderOptions};

/// Result type used throughout the Singly library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Singly library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured list errors from the list module
    #[error(transparent)]
    List(list::ListError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::List(_) => "list",
        }
    }

    /// Check if this error indicates an index past the end of a list.
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            Error::List(list_err) => list_err.is_out_of_bounds(),
        }
    }

    /// Check if this error was caused by an operation on an empty list.
    pub fn is_empty_list(&self) -> bool {
        match self {
            Error::List(list_err) => list_err.is_empty_list(),
        }
    }
}
