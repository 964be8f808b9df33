use crate::collections::arena::Link;

pub(crate) struct Node<K> {
    pub key: K,
    pub left: Link,
    pub right: Link,
}

impl<K> Node<K> {
    pub const fn leaf(key: K) -> Node<K> {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}

impl<K: Clone> Clone for Node<K> {
    fn clone(&self) -> Self {
        Node {
            key: self.key.clone(),
            left: self.left,
            right: self.right,
        }
    }
}

/// The link a node hangs from: the tree's root, or the left or right child of the node at the
/// given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Root,
    Left(usize),
    Right(usize),
}
