//! Graph storage and traversals.
//!
//! - `basic`: the adjacency-list graph, its vertex and edge types, and the
//!   BFS/DFS path searches

pub mod basic;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{
    breadth_first_search, depth_first_search, Adjacency, Edge, EdgeKind, Graph, Vertex, Visit,
};
