//! Index-addressed node storage for the linked collections and the binary tree. Nodes refer to
//! each other by slot index rather than by pointer, and vacated slots are reused through a free
//! list threaded through the empty slots.

use std::ops::{Index, IndexMut};

use crate::collections::contiguous::DynamicArray;
use crate::util::option::OptionExtension;

/// An optional reference to another node in the same [`Arena`].
pub(crate) type Link = Option<usize>;

pub(crate) struct Arena<T> {
    slots: DynamicArray<Slot<T>>,
    free: Link,
    len: usize,
}

enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Link },
}

impl<T> Arena<T> {
    pub fn new() -> Arena<T> {
        Arena {
            slots: DynamicArray::new(),
            free: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    /// Stores `value` in a vacant slot (or a new one) and returns its index.
    pub fn insert(&mut self, value: T) -> usize {
        self.len += 1;
        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index];
                if let Slot::Vacant { next_free } = slot {
                    self.free = *next_free;
                }
                *slot = Slot::Occupied(value);
                index
            },
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            },
        }
    }

    /// Takes the value out of the slot at `index`, returning None if it was already vacant.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        if let Slot::Vacant { .. } = slot { return None; }

        let taken = std::mem::replace(slot, Slot::Vacant { next_free: self.free });
        self.free = Some(index);
        self.len -= 1;

        match taken {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Arena::new();
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}

impl<T: Clone> Clone for Arena<T> {
    fn clone(&self) -> Self {
        Arena {
            slots: self.slots.iter().map(|slot| match slot {
                Slot::Occupied(value) => Slot::Occupied(value.clone()),
                Slot::Vacant { next_free } => Slot::Vacant { next_free: *next_free },
            }).collect(),
            free: self.free,
            len: self.len,
        }
    }
}

// Links are only ever created from live indices, so indexing a vacant slot is a bookkeeping bug.

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unreachable()
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unreachable()
    }
}
