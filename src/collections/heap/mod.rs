//! Array-backed binary heaps.

pub mod max_heap;
pub mod priority_queue;

pub use max_heap::MaxHeap;
pub use priority_queue::{OrdPriority, PriorityQueue};
