//! `BinarySearchTree` — an unbalanced binary search tree.
//!
//! Smaller values go left; equal and greater values go right, so duplicates
//! are kept. There is no rebalancing: sorted input degenerates into a list
//! and every operation becomes \(O(n)\). All walks are iterative.

use core::cmp::Ordering;
use core::fmt;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A binary search tree over `Ord` values.
///
/// ### Performance Characteristics
/// | Operation | Average | Worst |
/// |-----------|---------|-------|
/// | `insert` | \(O(\log n)\) | \(O(n)\) |
/// | `contains` | \(O(\log n)\) | \(O(n)\) |
/// | `min` / `max` | \(O(\log n)\) | \(O(n)\) |
///
/// `Clone` and `Drop` walk the tree iteratively, so even a fully degenerate
/// tree can be copied and dropped without deep recursion.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value`, walking down from the root to the first free slot.
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::leaf(value));
        self.len += 1;
    }

    /// Returns `true` if `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }
}

impl<T> BinarySearchTree<T> {
    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The least value.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The greatest value.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            best = best.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        best
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root.as_deref();
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(&node.value);
                current = node.right.as_deref();
            }
        }
        out
    }

    /// Values with each node before its subtrees.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Values with each node after its subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    // Post-order copy: both subtrees of a node are built, and sit on top of
    // `built`, by the time the node itself is visited.
    fn clone(&self) -> Self {
        let mut pending: Vec<(&Node<T>, bool)> =
            self.root.as_deref().map(|n| (n, false)).into_iter().collect();
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        while let Some((node, expanded)) = pending.pop() {
            if expanded {
                let right = node.right.as_ref().and_then(|_| built.pop());
                let left = node.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Node {
                    value: node.value.clone(),
                    left,
                    right,
                }));
            } else {
                pending.push((node, true));
                pending.extend(node.right.as_deref().map(|n| (n, false)));
                pending.extend(node.left.as_deref().map(|n| (n, false)));
            }
        }
        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Unlinks iteratively so a degenerate tree does not overflow the stack
    // through recursive `Box` drops.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.len)
            .field("in_order", &self.in_order())
            .finish()
    }
}

fn fmt_node<T: fmt::Display>(node: &Node<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(left) = node.left.as_deref() {
        fmt_node(left, f)?;
        f.write_str(" <-")?;
    }
    write!(f, "{}", node.value)?;
    if let Some(right) = node.right.as_deref() {
        f.write_str("-> ")?;
        fmt_node(right, f)?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    /// Renders `left <-value-> right` recursively; an empty tree renders as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            Some(root) => fmt_node(root, f),
            None => Ok(()),
        }
    }
}
