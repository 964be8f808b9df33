use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::slice;

use super::IntoIter;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>),
/// which it wraps, but with explicit reallocation instead of growth.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc_with` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct Array<T> {
    pub(crate) data: Box<[T]>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> Array<T> {
        Array {
            data: Box::new([]),
        }
    }

    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Creates a new Array of the provided `size`, calling `f` once to produce each element.
    pub fn repeat_with(size: usize, f: impl FnMut() -> T) -> Array<T> {
        Array {
            data: iter::repeat_with(f).take(size).collect(),
        }
    }

    /// Resizes the Array to `new_size`. Elements up to the smaller of the two sizes are kept in
    /// place, excess elements are dropped and new slots are filled by calling `f`.
    pub fn realloc_with(&mut self, new_size: usize, f: impl FnMut() -> T) {
        let mut items = mem::take(&mut self.data).into_vec();
        items.resize_with(new_size, f);
        self.data = items.into_boxed_slice();
    }
}

impl<T: Default> Array<T> {
    /// Creates a new Array of the provided `size`, with every element set to `T::default()`.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Array;
    /// let arr: Array<Option<u8>> = Array::repeat_default(3);
    /// assert_eq!(&*arr, &[None, None, None]);
    /// ```
    pub fn repeat_default(size: usize) -> Array<T> {
        Array::repeat_with(size, T::default)
    }

    /// Resizes the Array to `new_size`, filling any new slots with `T::default()`.
    pub fn realloc_with_default(&mut self, new_size: usize) {
        self.realloc_with(new_size, T::default)
    }
}

impl<T: Clone> Array<T> {
    /// Creates a new Array of the provided `size`, with every element a clone of `item`.
    pub fn repeat(item: T, size: usize) -> Array<T> {
        Array {
            data: iter::repeat_n(item, size).collect(),
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array {
            data: self.data.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.data == *other.data
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(value: [T; N]) -> Self {
        Array {
            data: Box::new(value),
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.data.into_vec().into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
