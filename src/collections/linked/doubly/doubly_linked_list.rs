use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::arena::{Arena, Link};
use crate::util::option::OptionExtension;

/// A list with links in both directions. Nodes live in an index-addressed arena and refer to
/// their neighbours by index, so there are no owning cycles between them.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `insert_after` | `O(i)` |
/// | `insert_before` | `O(i)` |
/// | `delete_after` | `O(i)` |
/// | `delete_before` | `O(i)` |
/// | `remove_value` | `O(i)` |
/// | `contains` | `O(n)` |
pub struct DoublyLinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<&T> {
        Some(&self.nodes[self.head?].value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        Some(&mut self.nodes[self.head?].value)
    }

    pub fn back(&self) -> Option<&T> {
        Some(&self.nodes[self.tail?].value)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        Some(&mut self.nodes[self.tail?].value)
    }

    pub fn push_front(&mut self, value: T) {
        let head = self.head;
        self.link_between(None, head, value);
    }

    pub fn push_back(&mut self, value: T) {
        let tail = self.tail;
        self.link_between(tail, None, value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Returns a reference to the first element matching `pred`.
    pub fn find_by(&self, pred: impl FnMut(&T) -> bool) -> Option<&T> {
        let index = self.locate(pred)?;
        Some(&self.nodes[index].value)
    }

    /// Returns a mutable reference to the first element matching `pred`.
    pub fn find_by_mut(&mut self, pred: impl FnMut(&T) -> bool) -> Option<&mut T> {
        let index = self.locate(pred)?;
        Some(&mut self.nodes[index].value)
    }

    /// Removes and returns the first element matching `pred`.
    pub fn remove_first_by(&mut self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.locate(pred)?;
        Some(self.unlink(index))
    }

    pub fn clear(&mut self) {
        *self = DoublyLinkedList::new();
    }

    /// Returns an iterator over the elements from front to back. The iterator is double-ended, so
    /// `iter().rev()` walks the list from back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub(crate) fn locate(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        let mut curr = self.head;

        while let Some(index) = curr {
            let node = &self.nodes[index];
            if pred(&node.value) {
                return Some(index);
            }
            curr = node.next;
        }

        None
    }

    /// Creates a node holding `value` between the two provided neighbours, which must be adjacent
    /// (None standing in for either end of the list), and returns its index.
    pub(crate) fn link_between(&mut self, prev: Link, next: Link, value: T) -> usize {
        let index = self.nodes.insert(Node {
            value,
            prev,
            next,
        });

        match prev {
            Some(prev) => self.nodes[prev].next = Some(index),
            None => self.head = Some(index),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(index),
            None => self.tail = Some(index),
        }

        index
    }

    /// Detaches the node at `index`, joining its neighbours, and returns its value.
    pub(crate) fn unlink(&mut self, index: usize) -> T {
        let node = self.nodes.remove(index).unreachable();

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        node.value
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.locate(|value| value == item).is_some()
    }

    /// Removes the first element equal to `item`, returning true if one was found.
    pub fn remove_value(&mut self, item: &T) -> bool {
        self.remove_first_by(|value| value == item).is_some()
    }

    /// Inserts `value` directly after the first element equal to `target`. Returns false, without
    /// inserting, if there is no such element.
    pub fn insert_after(&mut self, target: &T, value: T) -> bool {
        let Some(index) = self.locate(|existing| existing == target) else {
            return false;
        };

        let next = self.nodes[index].next;
        self.link_between(Some(index), next, value);
        true
    }

    /// Inserts `value` directly before the first element equal to `target`. Returns false, without
    /// inserting, if there is no such element.
    pub fn insert_before(&mut self, target: &T, value: T) -> bool {
        let Some(index) = self.locate(|existing| existing == target) else {
            return false;
        };

        let prev = self.nodes[index].prev;
        self.link_between(prev, Some(index), value);
        true
    }

    /// Removes and returns the element directly after the first element equal to `target`.
    pub fn delete_after(&mut self, target: &T) -> Option<T> {
        let index = self.locate(|existing| existing == target)?;
        let next = self.nodes[index].next?;
        Some(self.unlink(next))
    }

    /// Removes and returns the element directly before the first element equal to `target`.
    pub fn delete_before(&mut self, target: &T) -> Option<T> {
        let index = self.locate(|existing| existing == target)?;
        let prev = self.nodes[index].prev?;
        Some(self.unlink(prev))
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (position, item) in self.iter().enumerate() {
            if position > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
