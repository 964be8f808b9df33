use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use log::warn;

use crate::collections::contiguous::Array;
use crate::util::fmt::DebugRaw;

use super::TableFull;
use super::probe::Probe;

/// The capacity used by [`OpenHashTable::new`], and by [`OpenHashTable::with_cap`] when given 0.
pub const DEFAULT_CAP: usize = 101;

/// The load factor at and above which inserts log a warning.
pub const HIGH_LOAD_FACTOR: f64 = 0.7;

/// The state of a single slot in an [`OpenHashTable`]. Removing an entry leaves a `Deleted`
/// tombstone so that probe sequences passing through the slot stay intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied {
        key: String,
        value: String,
    },
    Deleted,
}

/// A hash table with unique keys that stores its entries directly in a fixed-capacity array of
/// [`Slot`]s, resolving collisions by quadratic probing. The capacity is chosen at construction
/// and never changes; the table doesn't rehash.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `p`: The length of the key's probe sequence, bounded by the capacity.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(p)` |
/// | `get` | `O(p)` |
/// | `remove` | `O(p)` |
/// | `clear` | `O(cap)` |
///
/// Tombstones count towards `p` until the table is cleared.
pub struct OpenHashTable {
    pub(crate) slots: Array<Slot>,
    pub(crate) len: usize,
}

impl OpenHashTable {
    pub fn new() -> OpenHashTable {
        OpenHashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty table with `cap` slots, or [`DEFAULT_CAP`] slots if `cap` is 0.
    pub fn with_cap(cap: usize) -> OpenHashTable {
        let cap = if cap == 0 { DEFAULT_CAP } else { cap };

        OpenHashTable {
            slots: Array::repeat_default(cap),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cap(&self) -> usize {
        self.slots.size()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    /// Returns the number of [`Slot::Deleted`] tombstones.
    pub fn tombstones(&self) -> usize {
        self.slots.iter().filter(|slot| matches!(slot, Slot::Deleted)).count()
    }

    /// Inserts a key-value pair, replacing and returning the existing value if `key` is already
    /// present.
    ///
    /// The key's probe sequence is followed until an empty slot or the key itself is found. A new
    /// entry takes the first tombstone passed along the way, or the empty slot if there was none.
    ///
    /// # Errors
    /// Returns [`TableFull`] if the whole probe sequence holds other keys.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, TableFull> {
        let key = key.into();
        let value = value.into();

        if self.load_factor() >= HIGH_LOAD_FACTOR {
            warn!(
                "OpenHashTable is {} of {} slots full, consider a larger capacity",
                self.len,
                self.cap()
            );
        }

        let mut vacant = None;
        for index in Probe::new(&key, self.cap()) {
            match &mut self.slots[index] {
                Slot::Occupied { key: existing, value: old } if *existing == key => {
                    return Ok(Some(mem::replace(old, value)));
                },
                Slot::Occupied { .. } => (),
                Slot::Deleted => {
                    vacant.get_or_insert(index);
                },
                Slot::Empty => {
                    vacant.get_or_insert(index);
                    break;
                },
            }
        }

        let index = vacant.ok_or(TableFull { cap: self.cap() })?;
        self.slots[index] = Slot::Occupied { key, value };
        self.len += 1;
        Ok(None)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match &self.slots[self.slot_of(key)?] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slot_of(key).is_some()
    }

    /// Removes `key`, leaving a tombstone in its slot, and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.slot_of(key)?;

        let Slot::Occupied { value, .. } = mem::replace(&mut self.slots[index], Slot::Deleted) else {
            unreachable!("slot_of only returns occupied slots")
        };

        self.len -= 1;
        Some(value)
    }

    /// Empties every slot, tombstones included, keeping the capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }

    /// Returns the index of the slot holding `key`. Probing stops at the first empty slot or after
    /// `cap` steps, skipping over tombstones.
    pub fn slot_of(&self, key: &str) -> Option<usize> {
        for index in Probe::new(key, self.cap()) {
            match &self.slots[index] {
                Slot::Occupied { key: existing, .. } if existing == key => return Some(index),
                Slot::Empty => return None,
                _ => (),
            }
        }
        None
    }

    /// Returns the slot at `index`, or None if `index` is not below the capacity.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Returns an iterator over the keys of live entries, in slot order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over live entries as key-value pairs, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key.as_str(), value.as_str())),
            _ => None,
        })
    }
}

impl Default for OpenHashTable {
    fn default() -> Self {
        OpenHashTable::new()
    }
}

impl Clone for OpenHashTable {
    fn clone(&self) -> Self {
        OpenHashTable {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl Debug for OpenHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenHashTable")
            .field("slots", &DebugSlots(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for OpenHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

struct DebugSlots<'a>(&'a OpenHashTable);

impl Debug for DebugSlots<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.slots.iter().map(|slot| match slot {
                Slot::Empty => DebugRaw(String::from("-")),
                Slot::Deleted => DebugRaw(String::from("x")),
                Slot::Occupied { key, value } => DebugRaw(format!("({key:?}: {value:?})")),
            }))
            .finish()
    }
}
