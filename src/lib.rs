//! # `classic-dsa` - Textbook Data Structures
//!
//! Minimal, independent implementations of the classic data structures, each
//! documented with its textbook complexity, plus an adjacency-list graph with
//! breadth-first and depth-first path search.
//!
//! ## Contents
//!
//! - **Linear**: [`Stack`] (LIFO), [`Queue`] (FIFO), [`LinkedList`] (singly
//!   linked, arena-indexed)
//! - **Heaps**: [`MaxHeap`], [`PriorityQueue`] ordered by any predicate
//! - **Trees**: [`BinaryTreeNode`], [`BinarySearchTree`], n-ary [`Tree`]
//! - **Graph**: [`Graph`] with directed and undirected edges,
//!   [`breadth_first_search`] (shortest path by edge count) and
//!   [`depth_first_search`] (first path found, with backtracking)
//!
//! ## Design
//!
//! Every structure is a plain owned value: no interior mutability, no shared
//! ownership, no reference cycles. Trees own their children and keep no
//! parent links; the linked list links nodes by arena index. Absence is
//! always reported through `Option` or an empty result. The one fallible
//! operation is inserting a graph edge whose endpoint belongs to a different
//! graph, which returns [`GraphError::UnknownVertex`].
//!
//! ## Features
//!
//! - `tracing`: emits structured `tracing` events from the graph searches
//!   (start, descent, backtrack, outcome) and from rejected edge insertions.
//!
//! ## Example
//!
//! ```rust
//! use classic_dsa::{Adjacency, Graph};
//!
//! let mut graph = Graph::new();
//! let a = graph.create_vertex("a");
//! let b = graph.create_vertex("b");
//! let c = graph.create_vertex("c");
//!
//! graph.add_directed_edge(&a, &b)?;
//! graph.add_directed_edge(&b, &c)?;
//! graph.add_directed_edge(&a, &c)?;
//!
//! // BFS finds the direct edge.
//! let path = graph.bfs(&a, &c).expect("c is reachable");
//! assert_eq!(path.len(), 1);
//!
//! // DFS follows edges in insertion order and goes through `b`.
//! let route = graph.dfs(&a, &c);
//! assert_eq!(route.as_slice(), &[a, b, c]);
//! # Ok::<(), classic_dsa::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{
    BinarySearchTree, BinaryTreeNode, LinkedList, MaxHeap, PriorityQueue, Queue, Stack, Tree,
};
pub use error::{GraphError, Result};
pub use graph::{
    breadth_first_search, depth_first_search, Adjacency, Edge, EdgeKind, Graph, Vertex, Visit,
};
