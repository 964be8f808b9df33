//! Contiguous collection types, based on a fixed-size heap [`Array`]. [`DynamicArray`] builds on
//! top of it and doubles its capacity as elements are pushed, and [`Stack`] is a thin LIFO wrapper
//! around [`DynamicArray`].

pub mod array;
pub mod dynamic_array;
pub mod stack;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
