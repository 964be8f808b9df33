use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::arena::{Arena, Link};
use crate::util::option::OptionExtension;

/// A list with links in one direction, from front to back. Nodes live in an index-addressed
/// arena and a link to the back node is kept so that `push_back` doesn't need to walk the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
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
/// | `pop_back` | `O(n)` |
/// | `insert_after` | `O(i)` |
/// | `insert_before` | `O(i)` |
/// | `delete_after` | `O(i)` |
/// | `delete_before` | `O(i)` |
/// | `remove_value` | `O(i)` |
/// | `contains` | `O(n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
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
        let index = self.nodes.insert(Node {
            value,
            next: self.head,
        });

        self.head = Some(index);
        if self.tail.is_none() {
            self.tail = Some(index);
        }
    }

    pub fn push_back(&mut self, value: T) {
        let index = self.nodes.insert(Node {
            value,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(None, head))
    }

    /// Removes the back element. The list only links forwards, so this walks the whole list to
    /// find the new back node.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let (prev, index) = self.locate(|_, next| next.is_none())?;
        debug_assert_eq!(index, tail);
        Some(self.unlink(prev, index))
    }

    /// Returns a reference to the first element matching `pred`.
    pub fn find_by(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        let (_, index) = self.locate(|value, _| pred(value))?;
        Some(&self.nodes[index].value)
    }

    /// Returns a mutable reference to the first element matching `pred`.
    pub fn find_by_mut(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<&mut T> {
        let (_, index) = self.locate(|value, _| pred(value))?;
        Some(&mut self.nodes[index].value)
    }

    /// Removes and returns the first element matching `pred`.
    pub fn remove_first_by(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let (prev, index) = self.locate(|value, _| pred(value))?;
        Some(self.unlink(prev, index))
    }

    pub fn clear(&mut self) {
        *self = SinglyLinkedList::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Walks the list from the front, returning the index of the first node matching `pred`
    /// together with the link to the node before it (None for the front node).
    pub(crate) fn locate(
        &self,
        mut pred: impl FnMut(&T, Link) -> bool,
    ) -> Option<(Link, usize)> {
        let mut prev = None;
        let mut curr = self.head;

        while let Some(index) = curr {
            let node = &self.nodes[index];
            if pred(&node.value, node.next) {
                return Some((prev, index));
            }
            prev = curr;
            curr = node.next;
        }

        None
    }

    /// Locates the node at the provided `position` from the front.
    pub(crate) fn locate_position(&self, position: usize) -> Option<(Link, usize)> {
        let mut count = 0;
        self.locate(|_, _| {
            let found = count == position;
            count += 1;
            found
        })
    }

    /// Detaches the node at `index`, which must follow `prev` (or be the front node if `prev` is
    /// None), and returns its value.
    pub(crate) fn unlink(&mut self, prev: Link, index: usize) -> T {
        let node = self.nodes.remove(index).unreachable();

        match prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        if self.tail == Some(index) {
            self.tail = prev;
        }

        node.value
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.locate(|value, _| value == item).is_some()
    }

    /// Removes the first element equal to `item`, returning true if one was found.
    pub fn remove_value(&mut self, item: &T) -> bool {
        self.remove_first_by(|value| value == item).is_some()
    }

    /// Inserts `value` directly after the first element equal to `target`. Returns false, without
    /// inserting, if there is no such element.
    pub fn insert_after(&mut self, target: &T, value: T) -> bool {
        let Some((_, index)) = self.locate(|existing, _| existing == target) else {
            return false;
        };

        let next = self.nodes[index].next;
        let new = self.nodes.insert(Node {
            value,
            next,
        });
        self.nodes[index].next = Some(new);
        if self.tail == Some(index) {
            self.tail = Some(new);
        }
        true
    }

    /// Inserts `value` directly before the first element equal to `target`. Returns false, without
    /// inserting, if there is no such element.
    pub fn insert_before(&mut self, target: &T, value: T) -> bool {
        let Some((prev, index)) = self.locate(|existing, _| existing == target) else {
            return false;
        };

        let new = self.nodes.insert(Node {
            value,
            next: Some(index),
        });
        match prev {
            Some(prev) => self.nodes[prev].next = Some(new),
            None => self.head = Some(new),
        }
        true
    }

    /// Removes and returns the element directly after the first element equal to `target`.
    pub fn delete_after(&mut self, target: &T) -> Option<T> {
        let (_, index) = self.locate(|existing, _| existing == target)?;
        let next = self.nodes[index].next?;
        Some(self.unlink(Some(index), next))
    }

    /// Removes and returns the element directly before the first element equal to `target`.
    pub fn delete_before(&mut self, target: &T) -> Option<T> {
        let position = self.iter().position(|existing| existing == target)?;
        let (prev, index) = self.locate_position(position.checked_sub(1)?)?;
        Some(self.unlink(prev, index))
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (position, item) in self.iter().enumerate() {
            if position > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
