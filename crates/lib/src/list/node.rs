//! Node type for the singly linked list.

use std::fmt;

/// A single element of a [`LinkedList`](super::LinkedList).
///
/// A node owns its value and, through `next`, the entire remainder of the
/// chain. Values are read-only once the node is linked; replacing a value means
/// removing the node and inserting a new one.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Option<Box<Node<T>>>) -> Self {
        Self { value, next }
    }

    /// The value held by this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The successor of this node, or `None` if this is the tail.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Returns true if this node has no successor.
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// Consumes the boxed node, returning its value and detaching its successor.
    pub(crate) fn into_parts(self: Box<Self>) -> (T, Option<Box<Node<T>>>) {
        let Node { value, next } = *self;
        (value, next)
    }
}

// Shows the successor's value only; formatting the whole chain would recurse
// once per node.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("next", &self.next().map(Node::value))
            .finish()
    }
}
