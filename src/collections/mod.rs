//! Textbook collections.
//!
//! Collections are organized by data structure type:
//! - `linear`: stack, queue and singly linked list
//! - `heap`: max-heap and predicate-ordered priority queue
//! - `tree`: binary tree, binary search tree and n-ary tree

pub mod heap;
pub mod linear;
pub mod tree;

// Re-export commonly used types from submodules
pub use heap::{MaxHeap, PriorityQueue};
pub use linear::{LinkedList, Queue, Stack};
pub use tree::{BinarySearchTree, BinaryTreeNode, Tree};
