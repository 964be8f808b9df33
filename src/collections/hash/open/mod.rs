//! A module containing [`OpenHashTable`] and the [`TableFull`] error it reports when probing finds
//! no free slot.

mod error;
mod open_hash_table;
mod probe;

pub use error::*;
pub use open_hash_table::*;
