//! Basic graph implementations.
//!
//! This module contains the adjacency-list graph and the path searches that
//! run over it.

pub mod adjacency_graph;
pub mod algorithms;

pub use adjacency_graph::{Edge, EdgeKind, Graph, Vertex};
pub use algorithms::{breadth_first_search, depth_first_search, Adjacency, Visit};
