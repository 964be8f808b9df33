mod dynamic_array;
mod iter;
mod tests;

pub use dynamic_array::*;
pub use iter::*;
