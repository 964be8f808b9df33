//! A module containing [`BinarySearchTree`] and its iterators.
//!
//! Nodes live in an index arena rather than in individual boxes, so every traversal and rebuild is
//! iterative and the depth of a degenerate tree can't exhaust the call stack.

mod binary_search_tree;
mod iter;
mod node;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
