//! A module containing [`ChainedHashTable`] and its [`Entry`] type.
//!
//! The table is a multiset: inserting a key that is already present adds a second entry rather
//! than replacing the first, and lookups and removals act on the earliest inserted match.

mod chained_hash_table;

pub use chained_hash_table::*;
