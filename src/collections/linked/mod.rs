//! Linked collection types. Every node lives in an index-addressed arena owned by its list, and
//! links between nodes are slot indices rather than pointers.
//!
//! [`Queue`] is a thin FIFO wrapper around [`DoublyLinkedList`].

pub mod doubly;
pub mod queue;
pub mod singly;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use singly::SinglyLinkedList;
