use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{Iter, Node, PreOrder, PreOrderSlots, Side};
use crate::collections::arena::{Arena, Link};
use crate::collections::contiguous::DynamicArray;
use crate::util::option::OptionExtension;

/// A binary search tree of unique keys. Each node's left subtree holds only smaller keys and its
/// right subtree only larger ones. The tree isn't rebalanced, so its shape depends entirely on
/// insertion order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `h`: The height of the tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first`/`last` | `O(h)` |
/// | `height` | `O(n)` |
pub struct BinarySearchTree<K: Ord> {
    pub(crate) nodes: Arena<Node<K>>,
    pub(crate) root: Link,
}

impl<K: Ord> BinarySearchTree<K> {
    pub fn new() -> BinarySearchTree<K> {
        BinarySearchTree {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `key` as a new leaf, returning false without modifying the tree if it is already
    /// present.
    pub fn insert(&mut self, key: K) -> bool {
        let mut side = Side::Root;
        let mut curr = self.root;

        while let Some(index) = curr {
            let node = &self.nodes[index];
            match key.cmp(&node.key) {
                Ordering::Less => {
                    side = Side::Left(index);
                    curr = node.left;
                },
                Ordering::Greater => {
                    side = Side::Right(index);
                    curr = node.right;
                },
                Ordering::Equal => return false,
            }
        }

        let index = self.nodes.insert(Node::leaf(key));
        self.attach(side, Some(index));
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Removes `key` from the tree and returns it.
    ///
    /// A node with two children isn't unlinked itself: its in-order successor (the smallest key
    /// in its right subtree) is detached instead and that key takes the removed one's place.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let (side, index) = self.locate(key)?;
        let node = &self.nodes[index];

        match (node.left, node.right) {
            (None, child) | (child, None) => {
                self.attach(side, child);
                self.nodes.remove(index).map(|node| node.key)
            },
            (Some(_), Some(right)) => {
                let mut successor_side = Side::Right(index);
                let mut successor = right;
                while let Some(left) = self.nodes[successor].left {
                    successor_side = Side::Left(successor);
                    successor = left;
                }

                let successor_right = self.nodes[successor].right;
                self.attach(successor_side, successor_right);
                let successor = self.nodes.remove(successor).unreachable();

                Some(mem::replace(&mut self.nodes[index].key, successor.key))
            },
        }
    }

    /// Returns the smallest key.
    pub fn first(&self) -> Option<&K> {
        let mut index = self.root?;
        while let Some(left) = self.nodes[index].left {
            index = left;
        }
        Some(&self.nodes[index].key)
    }

    /// Returns the largest key.
    pub fn last(&self) -> Option<&K> {
        let mut index = self.root?;
        while let Some(right) = self.nodes[index].right {
            index = right;
        }
        Some(&self.nodes[index].key)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, 0 for an empty
    /// tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = DynamicArray::new();
        stack.extend(self.root.map(|root| (root, 1)));

        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[index];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Returns an iterator over the keys in pre-order: each node before its left subtree, and the
    /// left subtree before the right.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self)
    }

    /// Returns a pre-order iterator that also yields None for every absent child, fully
    /// describing the tree's shape.
    pub(crate) fn pre_order_slots(&self) -> PreOrderSlots<'_, K> {
        PreOrderSlots::new(self)
    }

    /// Rebuilds a tree from the sequence produced by
    /// [`pre_order_slots`](BinarySearchTree::pre_order_slots), calling `next` for one slot at a
    /// time until every pending child has been filled. Keys are linked in exactly where they
    /// appear, without comparisons, so the result has the same shape as the tree that was
    /// traversed.
    pub(crate) fn from_pre_order<E>(
        mut next: impl FnMut() -> Result<Option<K>, E>,
    ) -> Result<BinarySearchTree<K>, E> {
        let mut tree = BinarySearchTree::new();
        let mut pending = DynamicArray::new();
        pending.push(Side::Root);

        while let Some(side) = pending.pop() {
            if let Some(key) = next()? {
                let index = tree.nodes.insert(Node::leaf(key));
                tree.attach(side, Some(index));
                // Right first so that the left subtree is popped and filled first.
                pending.push(Side::Right(index));
                pending.push(Side::Left(index));
            }
        }
        Ok(tree)
    }

    fn locate(&self, key: &K) -> Option<(Side, usize)> {
        let mut side = Side::Root;
        let mut curr = self.root;

        while let Some(index) = curr {
            let node = &self.nodes[index];
            match key.cmp(&node.key) {
                Ordering::Less => {
                    side = Side::Left(index);
                    curr = node.left;
                },
                Ordering::Greater => {
                    side = Side::Right(index);
                    curr = node.right;
                },
                Ordering::Equal => return Some((side, index)),
            }
        }
        None
    }

    fn attach(&mut self, side: Side, link: Link) {
        match side {
            Side::Root => self.root = link,
            Side::Left(parent) => self.nodes[parent].left = link,
            Side::Right(parent) => self.nodes[parent].right = link,
        }
    }
}

impl<K: Ord> Default for BinarySearchTree<K> {
    fn default() -> Self {
        BinarySearchTree::new()
    }
}

impl<K: Ord + Clone> Clone for BinarySearchTree<K> {
    fn clone(&self) -> Self {
        BinarySearchTree {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

/// Trees are equal when they have the same keys in the same shape.
impl<K: Ord> PartialEq for BinarySearchTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.pre_order_slots().eq(other.pre_order_slots())
    }
}

impl<K: Ord> Eq for BinarySearchTree<K> {}

impl<K: Ord> FromIterator<K> for BinarySearchTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BinarySearchTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord + Debug> Debug for BinarySearchTree<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("keys", &DebugKeys(self))
            .field("len", &self.len())
            .field("height", &self.height())
            .finish()
    }
}

struct DebugKeys<'a, K: Ord>(&'a BinarySearchTree<K>);

impl<K: Ord + Debug> Debug for DebugKeys<'_, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<K: Ord + Display> Display for BinarySearchTree<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, key) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "}}")
    }
}
