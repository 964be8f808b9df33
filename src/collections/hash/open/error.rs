use derive_more::{Display, Error};

/// An error returned by [`OpenHashTable::insert`](super::OpenHashTable::insert) when every slot
/// along the key's probe sequence is occupied by another key.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No free slot found within {cap} probes of an OpenHashTable!")]
pub struct TableFull {
    pub cap: usize,
}
