//! A first-in, first-out [`Queue`], backed by a [`DoublyLinkedList`].

use std::fmt::{self, Debug, Display, Formatter};

use super::doubly::{DoublyLinkedList, Iter};

/// A first-in, first-out collection. Elements are pushed at the back and popped from the front,
/// both in `O(1)`.
pub struct Queue<T> {
    pub(crate) inner: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            inner: DoublyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.inner.push_back(value)
    }

    /// Removes and returns the element at the front of the Queue, or None if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Returns the element that would be popped next.
    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over the elements in the order that they will be popped.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.inner).finish()
    }
}

/// Displays the queue from the front: `<a, b, c]`.
impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.peek(), None);

        queue.push("first");
        queue.push("second");
        queue.push("third");
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&"first"));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), ["first", "second", "third"]);

        assert_eq!(queue.pop(), Some("first"));
        queue.push("fourth");
        assert_eq!(queue.pop(), Some("second"));
        assert_eq!(queue.pop(), Some("third"));
        assert_eq!(queue.pop(), Some("fourth"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue: Queue<u8> = (0..4).collect();
        queue.clear();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_display() {
        let queue: Queue<u8> = (1..=3).collect();
        assert_eq!(queue.to_string(), "<1, 2, 3]");
    }
}
