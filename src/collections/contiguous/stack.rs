//! A last-in, first-out [`Stack`], backed by a [`DynamicArray`].

use std::fmt::{self, Debug, Display, Formatter};

use super::dynamic_array::{DynamicArray, Iter};

/// A last-in, first-out collection. The top of the Stack is the end of the backing
/// [`DynamicArray`], so elements are stored (and iterated) in the order that they were pushed.
pub struct Stack<T> {
    pub(crate) inner: DynamicArray<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack {
            inner: DynamicArray::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Places `value` on top of the Stack.
    pub fn push(&mut self, value: T) {
        self.inner.push(value)
    }

    /// Removes and returns the top element, or None if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.last()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator from the bottom of the Stack to the top, which is the order the
    /// elements were pushed in. Use `iter().rev()` for pop order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.inner).finish()
    }
}

/// Displays the stack from the bottom, with the top marked: `[a, b, c>`.
impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ">")
    }
}
