//! Singly linked list built from exclusively owned nodes.
//!
//! Every node owns its successor through `Option<Box<Node<T>>>`, and the list
//! owns the head. Relinking during insertion and removal moves ownership with
//! [`Option::take`], so a node is never reachable from two places and the chain
//! can never form a cycle.
//!
//! Positional operations follow a sentinel convention: an index past the end,
//! an operation on an empty list, or a `pop` with no node before the tail, is a
//! no-op that reports absence through `None` (or `false`). The `try_*` variants report the same conditions as a
//! [`ListError`] for callers that prefer to propagate them.

use std::fmt;

use tracing::{debug, trace};

pub mod errors;
pub mod iter;
pub mod node;
pub mod render;

pub use errors::ListError;
pub use iter::{IntoIter, Iter, Nodes};
pub use node::Node;
pub use render::{RenderOptions, Rendered};

/// Link slot: the list's head field or some node's `next` field.
type Link<T> = Option<Box<Node<T>>>;

/// A singly linked list.
///
/// # Examples
///
/// ```
/// use singly::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.append(1);
/// list.append(2);
/// list.append(3);
///
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.at(1).map(|node| *node.value()), Some(2));
/// assert_eq!(list.to_string(), "( 1 ) -> ( 2 ) -> ( 3 ) -> null");
///
/// list.remove_at(1);
/// list.insert_at(5, 1);
/// list.pop();
/// assert_eq!(list.to_vec(), vec![1, 5]);
/// ```
pub struct LinkedList<T> {
    head: Link<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Adds a value at the start of the list. O(1).
    pub fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node::new(value, next)));
    }

    /// Adds a value at the end of the list. O(n).
    pub fn append(&mut self, value: T) {
        if self.head.is_none() {
            self.prepend(value);
            return;
        }

        *self.end_link() = Some(Box::new(Node::new(value, None)));
    }

    /// Counts the nodes from head to tail.
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// Returns true if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first node, or `None` if the list is empty.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// The last node, or `None` if the list is empty.
    pub fn tail(&self) -> Option<&Node<T>> {
        self.nodes().last()
    }

    /// The node at `index`, or `None` if the index is out of range.
    pub fn at(&self, index: usize) -> Option<&Node<T>> {
        self.nodes().nth(index)
    }

    /// The value at `index`, or `None` if the index is out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index).map(Node::value)
    }

    /// Removes the last node and returns its value.
    ///
    /// The tail is detached from the node before it, so a list needs at least
    /// two nodes. An empty list and a single-node list are left untouched and
    /// `None` is returned; [`remove_at(0)`](Self::remove_at) empties a
    /// single-node list.
    pub fn pop(&mut self) -> Option<T> {
        let Some(mut node) = self.head.as_deref_mut() else {
            debug!(operation = "pop", "List is empty, nothing to pop");
            return None;
        };
        if node.is_tail() {
            debug!(operation = "pop", "Tail has no predecessor, ignoring");
            return None;
        }

        while node.next.as_ref().is_some_and(|next| !next.is_tail()) {
            node = node.next.as_deref_mut()?;
        }
        trace!("Popping tail");
        let (value, _) = node.next.take()?.into_parts();
        Some(value)
    }

    /// Inserts `value` before the node currently at `index`.
    ///
    /// The node previously at `index` and everything after it shift back by
    /// one. Index 0 behaves like [`prepend`](Self::prepend). An index that
    /// does not address an existing node, including `size()`, leaves the list
    /// unchanged and returns `false`.
    pub fn insert_at(&mut self, value: T, index: usize) -> bool {
        let inserted = match self.link_mut(index) {
            Some(link) if link.is_some() => {
                let rest = link.take();
                *link = Some(Box::new(Node::new(value, rest)));
                true
            }
            _ => false,
        };

        if inserted {
            trace!(index, "Inserted node");
        } else {
            debug!(
                index,
                len = self.size(),
                operation = "insert_at",
                "Index out of range, ignoring"
            );
        }
        inserted
    }

    /// Removes the node at `index` and returns its value.
    ///
    /// The predecessor is relinked to the successor. Index 0 reassigns the
    /// head and the last index detaches the tail the way [`pop`](Self::pop)
    /// does. An index out of range leaves the list unchanged and returns
    /// `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let removed = if index == 0 {
            self.pop_front()
        } else {
            self.unlink(index)
        };

        match removed {
            Some(value) => {
                trace!(index, "Removed node");
                Some(value)
            }
            None => {
                debug!(
                    index,
                    len = self.size(),
                    operation = "remove_at",
                    "Index out of range, ignoring"
                );
                None
            }
        }
    }

    /// Returns true if any node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }

    /// The index of the first node holding a value equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == value)
    }

    /// Pairs the list with rendering options.
    ///
    /// `list.render(&RenderOptions::default())` displays exactly like `list`.
    pub fn render<'a>(&'a self, options: &'a RenderOptions) -> Rendered<'a, T> {
        Rendered::new(self, options)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }

    /// Iterates over the values, head first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes(),
        }
    }

    /// Iterates over the nodes, head first.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            current: self.head(),
        }
    }

    /// Copies the values into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Like [`at`](Self::at), reporting an out-of-range index as an error.
    pub fn try_at(&self, index: usize) -> Result<&Node<T>, ListError> {
        self.at(index).ok_or_else(|| ListError::IndexOutOfBounds {
            index,
            len: self.size(),
        })
    }

    /// Like [`tail`](Self::tail), reporting an empty list as an error.
    pub fn try_tail(&self) -> Result<&Node<T>, ListError> {
        self.tail().ok_or(ListError::Empty { operation: "tail" })
    }

    /// Like [`pop`](Self::pop), reporting a list too short to pop as an
    /// error.
    pub fn try_pop(&mut self) -> Result<T, ListError> {
        match self.pop() {
            Some(value) => Ok(value),
            None if self.is_empty() => Err(ListError::Empty { operation: "pop" }),
            None => Err(ListError::SingleNode { operation: "pop" }),
        }
    }

    /// Like [`insert_at`](Self::insert_at), reporting an out-of-range index as
    /// an error. The value is dropped on error.
    pub fn try_insert_at(&mut self, value: T, index: usize) -> Result<(), ListError> {
        if self.insert_at(value, index) {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds {
                index,
                len: self.size(),
            })
        }
    }

    /// Like [`remove_at`](Self::remove_at), reporting an out-of-range index as
    /// an error.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.remove_at(index)
            .ok_or_else(|| ListError::IndexOutOfBounds {
                index,
                len: self.size(),
            })
    }

    /// Unlinks the head and returns its value.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let (value, next) = self.head.take()?.into_parts();
        self.head = next;
        Some(value)
    }

    /// The link slot that owns the node at `index`.
    ///
    /// Slot 0 is the head field; slot `i` is the `next` field of node `i - 1`.
    /// Returns `None` when fewer than `index` nodes exist.
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// The empty link slot after the tail (the head field when empty).
    pub(crate) fn end_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    /// Detaches the node at `index`, splicing its successor into its slot.
    fn unlink(&mut self, index: usize) -> Option<T> {
        let link = self.link_mut(index)?;
        let (value, next) = link.take()?.into_parts();
        *link = next;
        Some(value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Serialized as a plain sequence of values, head first
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for LinkedList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};
        use std::marker::PhantomData;

        struct ListVisitor<T>(PhantomData<T>);

        impl<'de, T: serde::Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
            type Value = LinkedList<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of list values")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut list = LinkedList::new();
                let mut link = &mut list.head;
                while let Some(value) = seq.next_element::<T>()? {
                    link = &mut link.insert(Box::new(Node::new(value, None))).next;
                }
                Ok(list)
            }
        }

        deserializer.deserialize_seq(ListVisitor(PhantomData))
    }
}
