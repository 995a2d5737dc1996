//! `Tree` — an n-ary tree with an ordered list of children per node.

use serde::{Deserialize, Serialize};

/// A node holding a value and any number of ordered child subtrees.
///
/// Equality and hashing cover the value and the whole child list, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tree<T> {
    value: T,
    children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    /// Creates a childless node.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Creates a node with the given children, in order.
    ///
    /// ```
    /// use classic_dsa::Tree;
    ///
    /// let tree = Tree::with_children("beverages", vec![
    ///     Tree::with_children("hot", vec![Tree::new("tea"), Tree::new("coffee")]),
    ///     Tree::new("cold"),
    /// ]);
    /// assert_eq!(tree.count(), 5);
    /// ```
    pub fn with_children(value: T, children: Vec<Tree<T>>) -> Self {
        Self { value, children }
    }

    /// The value at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Child subtrees in insertion order.
    pub fn children(&self) -> &[Tree<T>] {
        &self.children
    }

    /// Appends `child` after the existing children.
    pub fn add_child(&mut self, child: Tree<T>) {
        self.children.push(child);
    }

    /// Number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut best = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            best = best.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        best
    }
}

impl<T: PartialEq> Tree<T> {
    /// Returns the first subtree, in pre-order, whose value equals `value`.
    pub fn find(&self, value: &T) -> Option<&Tree<T>> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.value == *value {
                return Some(node);
            }
            // Reversed so the leftmost child is examined first.
            stack.extend(node.children.iter().rev());
        }
        None
    }
}
