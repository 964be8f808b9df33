mod doubly_linked_list;
mod iter;
mod tests;

pub use doubly_linked_list::*;
pub use iter::*;
