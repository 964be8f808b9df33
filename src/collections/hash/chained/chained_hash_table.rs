use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::Array;
use crate::collections::linked::SinglyLinkedList;
use crate::util::hash::polynomial_hash;

/// The fixed number of buckets in every [`ChainedHashTable`].
pub const TABLE_SIZE: usize = 101;

/// A key-value pair stored in one of a [`ChainedHashTable`]'s buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// A hash table with a fixed array of [`TABLE_SIZE`] buckets, where each bucket is a
/// [`SinglyLinkedList`] of the entries whose keys hash to it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `b`: The number of entries in the bucket for the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)` |
/// | `get` | `O(b)` |
/// | `contains` | `O(b)` |
/// | `remove` | `O(b)` |
///
/// The bucket count never changes, so `b` grows linearly with the number of entries once there
/// are more entries than buckets.
pub struct ChainedHashTable {
    pub(crate) buckets: Array<SinglyLinkedList<Entry>>,
    pub(crate) len: usize,
}

impl ChainedHashTable {
    pub fn new() -> ChainedHashTable {
        ChainedHashTable {
            buckets: Array::repeat_default(TABLE_SIZE),
            len: 0,
        }
    }

    /// Returns the number of entries, counting duplicate keys separately.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an entry for `key` to its bucket. Existing entries with the same key are left in
    /// place, so the key's count goes up by one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let index = Self::bucket_index(&key);

        self.buckets[index].push_back(Entry {
            key,
            value: value.into(),
        });
        self.len += 1;
    }

    /// Returns the value of the earliest inserted entry for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.buckets[Self::bucket_index(key)]
            .find_by(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries for `key`.
    pub fn count(&self, key: &str) -> usize {
        self.buckets[Self::bucket_index(key)]
            .iter()
            .filter(|entry| entry.key == key)
            .count()
    }

    /// Removes the earliest inserted entry for `key`, returning its value. The length only
    /// changes if an entry was actually removed.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.buckets[Self::bucket_index(key)]
            .remove_first_by(|entry| entry.key == key)?;

        self.len -= 1;
        Some(removed.value)
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns the bucket at `index`, or None if `index` is not below [`TABLE_SIZE`].
    pub fn bucket(&self, index: usize) -> Option<&SinglyLinkedList<Entry>> {
        self.buckets.get(index)
    }

    /// Returns an iterator over every key, bucket by bucket and in insertion order within each
    /// bucket. Duplicate keys are yielded once per entry.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over every entry as a key-value pair, in the same order as
    /// [`keys`](ChainedHashTable::keys).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .map(|entry| (entry.key.as_str(), entry.value.as_str()))
    }

    /// Calculates the bucket that `key` belongs in.
    pub fn bucket_index(key: &str) -> usize {
        polynomial_hash(key, TABLE_SIZE)
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        ChainedHashTable::new()
    }
}

impl Debug for ChainedHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("buckets", &DebugBuckets(self))
            .field("len", &self.len)
            .finish()
    }
}

impl Display for ChainedHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Only the occupied buckets are shown, keyed by their index.
struct DebugBuckets<'a>(&'a ChainedHashTable);

impl Debug for DebugBuckets<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.0.buckets.iter()
                    .enumerate()
                    .filter(|(_, bucket)| !bucket.is_empty())
            )
            .finish()
    }
}
