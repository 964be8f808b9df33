//! Saving and loading collections to and from files.
//!
//! Every collection implements [`Persist`], which offers a line-oriented text encoding and a
//! compact binary encoding of the collection's logical contents. Neither encoding captures
//! internal layout such as spare capacity or arena slots, with one exception: an
//! [`OpenHashTable`](crate::collections::hash::OpenHashTable) records its capacity.
//!
//! # Encodings
//! | Collection | Text | Binary |
//! |-|-|-|
//! | Sequences | count line, one record per line | count, then each record |
//! | `ChainedHashTable` | count line, one key per line | count, then each key |
//! | `OpenHashTable` | `"{cap} {len}"` line, one `key\tvalue` per line | cap, len, then each key and value |
//! | `BinarySearchTree<i32>` | pre-order, one key or `#` per line | pre-order, `1` and a key or `-1` per slot |
//!
//! Sequences are [`DynamicArray`](crate::collections::contiguous::DynamicArray),
//! [`Stack`](crate::collections::contiguous::Stack),
//! [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList),
//! [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList) and
//! [`Queue`](crate::collections::linked::Queue), each written in front to back order (bottom to
//! top for a stack). A `ChainedHashTable` only persists its keys; they are loaded back with empty
//! values.
//!
//! # Examples
//! ```
//! # use classic_collections::collections::linked::Queue;
//! # use classic_collections::persist::Persist;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let queue: Queue<String> = ["a", "b"].map(String::from).into_iter().collect();
//!
//! let mut bytes = Vec::new();
//! queue.write_text(&mut bytes)?;
//! assert_eq!(bytes, b"2\na\nb\n");
//!
//! let mut loaded = Queue::new();
//! loaded.read_text(&mut bytes.as_slice())?;
//! assert_eq!(loaded, queue);
//! # Ok(())
//! # }
//! ```

pub(crate) mod binary;
mod error;
mod format;
mod hash;
mod persist;
mod record;
mod sequence;
pub(crate) mod text;
mod tree;
mod tests;

pub use error::*;
pub use format::*;
pub use persist::*;
pub use record::*;
