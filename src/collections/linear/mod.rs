//! Linear containers.
//!
//! `Stack` and `Queue` are the auxiliary containers behind the graph
//! searches; `LinkedList` is a standalone singly linked list.

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
