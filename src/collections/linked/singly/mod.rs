mod iter;
mod singly_linked_list;

pub use iter::*;
pub use singly_linked_list::*;
