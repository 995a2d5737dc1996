//! Owned tree structures.
//!
//! None of these keep parent links; every node owns its children.

pub mod binary_tree;
pub mod bst;
pub mod nary;

pub use binary_tree::BinaryTreeNode;
pub use bst::BinarySearchTree;
pub use nary::Tree;
