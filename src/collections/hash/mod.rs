//! String-keyed hash tables, both hashing with the same polynomial string hash:
//! [`ChainedHashTable`] resolves collisions with a list per bucket, [`OpenHashTable`] probes
//! quadratically within a single fixed-capacity slot array.

pub mod chained;
pub mod open;

#[doc(inline)]
pub use chained::ChainedHashTable;
#[doc(inline)]
pub use open::OpenHashTable;
