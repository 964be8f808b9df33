use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{IntoIter, Iter, IterMut};
use crate::collections::contiguous::Array;
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

pub(crate) const DEFAULT_CAP: usize = 4;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array`]. Slots past the length are kept
/// empty, so the backing Array is exactly [`cap`](DynamicArray::cap) elements long.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)`* |
/// | `remove` | `O(n-i)` |
/// | `set` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, the capacity is
/// doubled first, which takes `O(n)`.
///
/// \** If the DynamicArray has enough capacity for the additional items already, `reserve` is
/// `O(1)`.
pub struct DynamicArray<T> {
    pub(crate) arr: Array<Option<T>>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty DynamicArray with the default capacity of 4.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<String> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 4);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_cap(DEFAULT_CAP)
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            arr: Array::repeat_with(cap, || None),
            len: 0,
        }
    }

    /// Returns the length of the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the DynamicArray.
    pub fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes the provided value onto the end of the DynamicArray, doubling the capacity if
    /// required.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(arr.cap(), 8);
    /// assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len] = Some(value);
        self.len += 1;
    }

    /// Removes the last element of the DynamicArray and returns it, or None if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.len.checked_sub(1)?;
        self.len = index;
        self.arr[index].take()
    }

    /// Inserts `value` at `index`, shifting all following elements one place to the right. An
    /// `index` equal to the length appends the value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is greater than the length, leaving the
    /// DynamicArray untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // The slot at len is empty, rotating moves it to index.
        self.arr[index..=self.len].rotate_right(1);
        self.arr[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all following elements one place to
    /// the left. Returns None if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len { return None; }

        let removed = self.arr[index].take();
        self.arr[index..self.len].rotate_left(1);
        self.len -= 1;
        removed
    }

    /// Returns a reference to the element at `index`, or None if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len { return None; }

        self.arr[index].as_ref()
    }

    /// Returns a mutable reference to the element at `index`, or None if it is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len { return None; }

        self.arr[index].as_mut()
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if there is no element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        match self.get_mut(index) {
            Some(existing) => Ok(mem::replace(existing, value)),
            None => Err(IndexOutOfBounds { index, len }),
        }
    }

    /// Returns a reference to the first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Removes every element and resets the capacity to the default.
    pub fn clear(&mut self) {
        *self = DynamicArray::new();
    }

    /// Increases the capacity of the DynamicArray so that `extra` more elements fit without
    /// reallocation.
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len + extra;
        if new_cap <= self.cap() { return; }

        self.arr.realloc_with(new_cap, || None);
    }

    /// Returns an iterator over references to the elements, in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, DEFAULT_CAP);

        self.arr.realloc_with(new_cap, || None);
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|existing| existing == item)
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
            .ok_or(IndexOutOfBounds { index, len: self.len })
            .throw()
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        self.get_mut(index)
            .ok_or(IndexOutOfBounds { index, len })
            .throw()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        DynamicArray::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        DynamicArray {
            arr: self.arr.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("items", &DebugItems(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

struct DebugItems<'a, T>(&'a DynamicArray<T>);

impl<T: Debug> Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
