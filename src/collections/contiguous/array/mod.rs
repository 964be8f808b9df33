mod array;
mod iter;

pub use array::*;
pub use iter::*;
