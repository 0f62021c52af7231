//! Iterators over a [`LinkedList`].

use std::iter::FusedIterator;

use super::{LinkedList, Node};

/// Borrowing iterator over the nodes of a list, head first.
///
/// Created by [`LinkedList::nodes`].
#[derive(Debug)]
pub struct Nodes<'a, T> {
    pub(crate) current: Option<&'a Node<T>>,
}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Nodes {
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next();
        Some(node)
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

/// Borrowing iterator over the values of a list, head first.
///
/// Created by [`LinkedList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    pub(crate) nodes: Nodes<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the values of a list, head first.
///
/// Created by `LinkedList::into_iter`. Each step unlinks the current head.
#[derive(Debug)]
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends every value in order.
    ///
    /// The tail is located once and then tracked, so extending is linear in the
    /// combined length rather than quadratic.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = self.end_link();
        for value in iter {
            link = &mut link.insert(Box::new(Node::new(value, None))).next;
        }
    }
}
