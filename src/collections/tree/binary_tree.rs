//! `BinaryTreeNode` — an owned binary tree with the three depth-first orders.
//!
//! Every node owns its children through `Option<Box<_>>`; there are no parent
//! links. Traversals are iterative (explicit stacks), so degenerate trees do
//! not grow the call stack.

/// A node of a binary tree, owning its subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryTreeNode<T> {
    value: T,
    left: Option<Box<BinaryTreeNode<T>>>,
    right: Option<Box<BinaryTreeNode<T>>>,
}

impl<T> BinaryTreeNode<T> {
    /// Creates a leaf.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a node with the given subtrees.
    pub fn with_children(
        value: T,
        left: Option<BinaryTreeNode<T>>,
        right: Option<BinaryTreeNode<T>>,
    ) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left subtree.
    pub fn left(&self) -> Option<&BinaryTreeNode<T>> {
        self.left.as_deref()
    }

    /// The right subtree.
    pub fn right(&self) -> Option<&BinaryTreeNode<T>> {
        self.right.as_deref()
    }

    /// Replaces the left subtree, returning the old one.
    pub fn set_left(&mut self, node: Option<BinaryTreeNode<T>>) -> Option<BinaryTreeNode<T>> {
        core::mem::replace(&mut self.left, node.map(Box::new)).map(|b| *b)
    }

    /// Replaces the right subtree, returning the old one.
    pub fn set_right(&mut self, node: Option<BinaryTreeNode<T>>) -> Option<BinaryTreeNode<T>> {
        core::mem::replace(&mut self.right, node.map(Box::new)).map(|b| *b)
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.walk(Order::Pre, |_| count += 1);
        count
    }

    /// Always `false`: a node is a non-empty tree.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            best = best.max(depth);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        best
    }

    /// Visits the left subtree, then the node, then the right subtree.
    pub fn in_order_with<F: FnMut(&T)>(&self, mut visit: F) {
        self.walk(Order::In, |v| visit(v));
    }

    /// Visits the node before its left and right subtrees.
    pub fn pre_order_with<F: FnMut(&T)>(&self, mut visit: F) {
        self.walk(Order::Pre, |v| visit(v));
    }

    /// Visits the left and right subtrees before the node.
    pub fn post_order_with<F: FnMut(&T)>(&self, mut visit: F) {
        self.walk(Order::Post, |v| visit(v));
    }

    /// Values in in-order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.walk(Order::In, |v| out.push(v));
        out
    }

    /// Values in pre-order.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.walk(Order::Pre, |v| out.push(v));
        out
    }

    /// Values in post-order.
    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.walk(Order::Post, |v| out.push(v));
        out
    }

    fn walk<'a, F: FnMut(&'a T)>(&'a self, order: Order, mut sink: F) {
        match order {
            Order::Pre => {
                let mut stack = vec![self];
                while let Some(node) = stack.pop() {
                    sink(&node.value);
                    stack.extend(node.right());
                    stack.extend(node.left());
                }
            }
            Order::In => {
                let mut stack: Vec<&'a BinaryTreeNode<T>> = Vec::new();
                let mut current = Some(self);
                while current.is_some() || !stack.is_empty() {
                    while let Some(node) = current {
                        stack.push(node);
                        current = node.left();
                    }
                    if let Some(node) = stack.pop() {
                        sink(&node.value);
                        current = node.right();
                    }
                }
            }
            Order::Post => {
                // The second flag marks a node whose children are already queued.
                let mut stack = vec![(self, false)];
                while let Some((node, expanded)) = stack.pop() {
                    if expanded {
                        sink(&node.value);
                    } else {
                        stack.push((node, true));
                        stack.extend(node.right().map(|n| (n, false)));
                        stack.extend(node.left().map(|n| (n, false)));
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

#[cfg(test)]
mod tests {
    use super::*;

    //        1
    //      /   \
    //     2     3
    //    / \     \
    //   4   5     6
    fn sample() -> BinaryTreeNode<i32> {
        BinaryTreeNode::with_children(
            1,
            Some(BinaryTreeNode::with_children(
                2,
                Some(BinaryTreeNode::new(4)),
                Some(BinaryTreeNode::new(5)),
            )),
            Some(BinaryTreeNode::with_children(3, None, Some(BinaryTreeNode::new(6)))),
        )
    }

    #[test]
    fn test_traversal_orders() {
        let tree = sample();
        assert_eq!(tree.in_order(), vec![&4, &2, &5, &1, &3, &6]);
        assert_eq!(tree.pre_order(), vec![&1, &2, &4, &5, &3, &6]);
        assert_eq!(tree.post_order(), vec![&4, &5, &2, &6, &3, &1]);
    }

    #[test]
    fn test_visitors_match_collected_orders() {
        let tree = sample();
        let mut seen = Vec::new();
        tree.post_order_with(|v| seen.push(*v));
        assert_eq!(seen, vec![4, 5, 2, 6, 3, 1]);

        seen.clear();
        tree.in_order_with(|v| seen.push(*v));
        assert_eq!(seen, vec![4, 2, 5, 1, 3, 6]);

        seen.clear();
        tree.pre_order_with(|v| seen.push(*v));
        assert_eq!(seen, vec![1, 2, 4, 5, 3, 6]);
    }

    #[test]
    fn test_shape_queries() {
        let mut tree = sample();
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.height(), 3);
        assert!(!tree.is_leaf());

        let old = tree.set_right(None);
        assert_eq!(old.map(|n| *n.value()), Some(3));
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.height(), 3);
        assert!(BinaryTreeNode::new(0).is_leaf());

        tree.set_left(None);
        assert_eq!(tree.len(), 1);
        assert!(tree.is_leaf());
    }
}
