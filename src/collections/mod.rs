//! Classic collection types, each built on the ones below it: fixed and growable arrays at the
//! bottom, linked lists over an index arena, then hash tables and a binary search tree.
//!
//! # Method
//! Linked nodes refer to each other by index into an arena rather than by pointer, so none of the
//! collections need unsafe code, and [`Array`](contiguous::Array) implements
//! [`Deref<Target = [T]>`](std::ops::Deref) to pick up the slice methods for free.

#[cfg(any(feature = "linked", feature = "binary_tree"))]
pub(crate) mod arena;
#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
