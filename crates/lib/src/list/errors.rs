//! Error types for checked list operations.
//!
//! The primary list API reports absence through `Option` and never fails.
//! The `try_*` variants surface the same conditions as structured errors for
//! callers that want to propagate them with `?`.

use thiserror::Error;

/// Structured error types for checked list operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index does not address an existing node
    #[error("List index out of bounds: index {index}, len {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The operation needs at least one node
    #[error("List is empty: cannot {operation}")]
    Empty { operation: &'static str },

    /// The operation needs a predecessor of the tail, but the list has one node
    #[error("List has a single node: cannot {operation}")]
    SingleNode { operation: &'static str },
}

impl ListError {
    /// Check if this error is an out-of-range index
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ListError::IndexOutOfBounds { .. })
    }

    /// Check if this error was caused by an empty list
    pub fn is_empty_list(&self) -> bool {
        matches!(self, ListError::Empty { .. })
    }

    /// Check if this error was caused by a list with only a head node
    pub fn is_single_node(&self) -> bool {
        matches!(self, ListError::SingleNode { .. })
    }

    /// Get the offending index if this is an index error
    pub fn index(&self) -> Option<usize> {
        match self {
            ListError::IndexOutOfBounds { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Get the operation name if the list was too short for it
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ListError::Empty { operation } | ListError::SingleNode { operation } => {
                Some(*operation)
            }
            _ => None,
        }
    }
}

// Conversion from ListError to the main Error type
impl From<ListError> for crate::Error {
    fn from(err: ListError) -> Self {
        crate::Error::List(err)
    }
}
