use std::iter::FusedIterator;

use super::{BinarySearchTree, Node};
use crate::collections::arena::{Arena, Link};
use crate::collections::contiguous::DynamicArray;
use crate::util::option::OptionExtension;

impl<K: Ord> IntoIterator for BinarySearchTree<K> {
    type Item = K;

    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            curr: self.root,
            nodes: self.nodes,
            stack: DynamicArray::new(),
        }
    }
}

/// An owning in-order iterator. Each node is taken out of the arena as its key is yielded.
pub struct IntoIter<K> {
    nodes: Arena<Node<K>>,
    stack: DynamicArray<usize>,
    curr: Link,
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.curr {
            self.stack.push(index);
            self.curr = self.nodes[index].left;
        }

        let node = self.nodes.remove(self.stack.pop()?).unreachable();
        self.curr = node.right;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}

impl<'a, K: Ord> IntoIterator for &'a BinarySearchTree<K> {
    type Item = &'a K;

    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over a tree's keys, holding the path of ancestors still to be visited.
pub struct Iter<'a, K> {
    nodes: &'a Arena<Node<K>>,
    stack: DynamicArray<usize>,
    curr: Link,
    len: usize,
}

impl<'a, K: Ord> Iter<'a, K> {
    pub(crate) fn new(tree: &'a BinarySearchTree<K>) -> Iter<'a, K> {
        Iter {
            nodes: &tree.nodes,
            stack: DynamicArray::new(),
            curr: tree.root,
            len: tree.len(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        while let Some(index) = self.curr {
            self.stack.push(index);
            self.curr = nodes[index].left;
        }

        let node = &nodes[self.stack.pop()?];
        self.curr = node.right;
        self.len -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// A pre-order iterator over a tree's keys.
pub struct PreOrder<'a, K> {
    nodes: &'a Arena<Node<K>>,
    stack: DynamicArray<usize>,
    len: usize,
}

impl<'a, K: Ord> PreOrder<'a, K> {
    pub(crate) fn new(tree: &'a BinarySearchTree<K>) -> PreOrder<'a, K> {
        let mut stack = DynamicArray::new();
        stack.extend(tree.root);

        PreOrder {
            nodes: &tree.nodes,
            stack,
            len: tree.len(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.stack.pop()?];

        self.stack.extend(node.right);
        self.stack.extend(node.left);
        self.len -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K> ExactSizeIterator for PreOrder<'_, K> {}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// A pre-order iterator yielding `Some(key)` for each node and `None` for each absent child. A
/// tree of `n` nodes produces exactly `2n + 1` items.
pub(crate) struct PreOrderSlots<'a, K> {
    nodes: &'a Arena<Node<K>>,
    stack: DynamicArray<Link>,
}

impl<'a, K: Ord> PreOrderSlots<'a, K> {
    pub fn new(tree: &'a BinarySearchTree<K>) -> PreOrderSlots<'a, K> {
        let mut stack = DynamicArray::new();
        stack.push(tree.root);

        PreOrderSlots {
            nodes: &tree.nodes,
            stack,
        }
    }
}

impl<'a, K> Iterator for PreOrderSlots<'a, K> {
    type Item = Option<&'a K>;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let Some(index) = self.stack.pop()? else {
            return Some(None);
        };

        let node = &nodes[index];
        self.stack.push(node.right);
        self.stack.push(node.left);
        Some(Some(&node.key))
    }
}

impl<K> FusedIterator for PreOrderSlots<'_, K> {}
