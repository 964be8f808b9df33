//! A small library of classic data structures, each of which can be saved to and loaded from a
//! file.
//!
//! # Purpose
//! These are the structures that every data structures course covers: arrays, linked lists,
//! stacks, queues, hash tables and a binary search tree. They're written from first principles
//! rather than on top of [`Vec`] or the `std` collections, with the aim of being correct rather
//! than fast.
//!
//! # Method
//! The collections are layered. A fixed-size heap [`Array`](collections::contiguous::Array) is the
//! only place memory is allocated directly, [`DynamicArray`](collections::contiguous::DynamicArray)
//! grows on top of it, and the linked lists and tree store their nodes in an index arena built on a
//! DynamicArray. Links between nodes are arena indices rather than pointers, so there is no unsafe
//! code anywhere in the crate.
//!
//! # Persistence
//! With the `persist` feature, every collection implements [`Persist`](persist::Persist), writing
//! its logical contents in either a line-oriented text format or a compact little-endian binary
//! format. See the [`persist`] module for the exact layouts.
//!
//! # Error Handling
//! Operations that can fail for reasons outside the caller's control return strongly typed errors,
//! enums for static dispatch built from structs that implement [`Error`](std::error::Error).
//! Indexing out of bounds still panics, the same as for a slice, with a non-panicking `get`
//! alongside it.
//!
//! # Dependencies
//! `derive_more` removes the repetitive error and display boilerplate, and the `log` facade is used
//! for the persistence layer's debug output and for warnings from the open-addressing table.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![forbid(unsafe_code)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "persist")]
pub mod persist;

pub(crate) mod util;
