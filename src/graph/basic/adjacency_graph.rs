//! A dynamic adjacency-list graph over hashable payloads.
//!
//! Vertices are numbered densely in creation order. The graph keeps one
//! outgoing edge list per vertex, indexed by that number, and the edge lists
//! are the only record of the graph's structure. Vertices and edges are never
//! removed.
//!
//! A [`Vertex`] is a plain value with no back-reference to its graph. Every
//! mutation checks that the vertices it is handed were created by *this* graph
//! (same index, same payload) and reports [`GraphError::UnknownVertex`]
//! otherwise.

use core::fmt;
use core::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::macros::trace_event;

/// A graph vertex: its creation index plus the caller's payload.
///
/// Equality and hashing cover both fields, so two vertices with the same index
/// but different payloads are different vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex<T> {
    index: usize,
    data: T,
}

impl<T> Vertex<T> {
    /// Position of this vertex in creation order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The payload supplied at creation.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index, self.data)
    }
}

/// A directed edge `source -> destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    source: Vertex<T>,
    destination: Vertex<T>,
}

impl<T> Edge<T> {
    /// The vertex the edge leaves.
    #[inline]
    pub fn source(&self) -> &Vertex<T> {
        &self.source
    }

    /// The vertex the edge enters.
    #[inline]
    pub fn destination(&self) -> &Vertex<T> {
        &self.destination
    }
}

impl<T: Clone> Edge<T> {
    /// The same edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Selects how [`Graph::add_edge`] connects two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// One edge, `source -> destination`.
    Directed,
    /// Two edges, one in each direction.
    Undirected,
}

/// An adjacency-list graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `create_vertex` | \(O(1)\) amortized | Appends to internal vectors |
/// | `add_directed_edge` | \(O(1)\) amortized | Ownership check compares payloads |
/// | `add_undirected_edge` | \(O(1)\) amortized | Both endpoints checked before insertion |
/// | `edges_from` | \(O(1)\) | Borrowed slice, insertion order |
/// | `edge_count` | \(O(n)\) | Sums list lengths |
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
    adjacency: Vec<Vec<Edge<T>>>,
}

impl<T> Graph<T> {
    /// Creates an empty graph.
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of directed edges. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no vertex has been created.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in creation order.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }
}

impl<T: Clone + Eq + Hash> Graph<T> {
    /// Creates a vertex carrying `data`.
    ///
    /// Its index is the number of vertices created before it, and it starts
    /// with an empty outgoing edge list.
    pub fn create_vertex(&mut self, data: T) -> Vertex<T> {
        let vertex = Vertex {
            index: self.vertices.len(),
            data,
        };
        self.vertices.push(vertex.clone());
        self.adjacency.push(Vec::new());
        vertex
    }

    /// Returns `true` if `vertex` was created by this graph.
    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.vertices.get(vertex.index) == Some(vertex)
    }

    fn check(&self, vertex: &Vertex<T>) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            trace_event!(debug, index = vertex.index, "rejected edge with unknown vertex");
            Err(GraphError::UnknownVertex {
                index: vertex.index,
            })
        }
    }

    // Callers have checked both endpoints.
    fn push_edge(&mut self, source: &Vertex<T>, destination: &Vertex<T>) {
        self.adjacency[source.index].push(Edge {
            source: source.clone(),
            destination: destination.clone(),
        });
    }

    /// Appends the edge `source -> destination` to `source`'s edge list.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either endpoint was not created by this
    /// graph. The graph is left unchanged.
    pub fn add_directed_edge(&mut self, source: &Vertex<T>, destination: &Vertex<T>) -> Result<()> {
        self.check(source)?;
        self.check(destination)?;
        self.push_edge(source, destination);
        Ok(())
    }

    /// Adds `a -> b` and `b -> a`.
    ///
    /// Both endpoints are checked before anything is inserted, so either both
    /// edges appear or neither does.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either endpoint was not created by this graph.
    pub fn add_undirected_edge(&mut self, a: &Vertex<T>, b: &Vertex<T>) -> Result<()> {
        self.check(a)?;
        self.check(b)?;
        self.push_edge(a, b);
        self.push_edge(b, a);
        Ok(())
    }

    /// Adds an edge of the given kind.
    ///
    /// # Errors
    /// See [`Graph::add_directed_edge`] and [`Graph::add_undirected_edge`].
    pub fn add_edge(
        &mut self,
        kind: EdgeKind,
        source: &Vertex<T>,
        destination: &Vertex<T>,
    ) -> Result<()> {
        match kind {
            EdgeKind::Directed => self.add_directed_edge(source, destination),
            EdgeKind::Undirected => self.add_undirected_edge(source, destination),
        }
    }

    /// Outgoing edges of `vertex` in insertion order.
    ///
    /// A vertex that this graph did not create has no edges here.
    pub fn edges_from(&self, vertex: &Vertex<T>) -> &[Edge<T>] {
        if self.contains_vertex(vertex) {
            &self.adjacency[vertex.index]
        } else {
            &[]
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    /// One line per vertex, in creation order: `0:a --> [ 1:b,2:c ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.vertices.iter().zip(&self.adjacency) {
            write!(f, "{vertex} --> [ ")?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", edge.destination)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_numbered_in_creation_order() {
        let mut graph = Graph::new();
        let a = graph.create_vertex("a");
        let b = graph.create_vertex("b");
        let c = graph.create_vertex("c");

        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.vertices(), &[a, b, c]);
        assert!(graph.edges_from(&a).is_empty());
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut graph = Graph::new();
        let v: Vec<_> = (0..4).map(|i| graph.create_vertex(i)).collect();

        graph.add_directed_edge(&v[0], &v[3]).unwrap();
        graph.add_directed_edge(&v[0], &v[1]).unwrap();
        graph.add_directed_edge(&v[0], &v[2]).unwrap();

        let dests: Vec<_> = graph
            .edges_from(&v[0])
            .iter()
            .map(|e| e.destination().index())
            .collect();
        assert_eq!(dests, vec![3, 1, 2]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_undirected_adds_both_directions() {
        let mut graph = Graph::new();
        let a = graph.create_vertex('a');
        let b = graph.create_vertex('b');

        graph.add_edge(EdgeKind::Undirected, &a, &b).unwrap();

        assert_eq!(graph.edges_from(&a), &[Edge { source: a, destination: b }]);
        assert_eq!(graph.edges_from(&b), &[Edge { source: b, destination: a }]);
        assert_eq!(graph.edges_from(&a)[0].reversed(), graph.edges_from(&b)[0]);
    }

    #[test]
    fn test_foreign_vertex_is_rejected() {
        let mut graph = Graph::new();
        let a = graph.create_vertex("a");

        let mut other = Graph::new();
        let _ = other.create_vertex("x");
        let stranger = other.create_vertex("y");
        // Same index as `a`, different payload.
        let impostor = other.vertices()[0];

        assert_eq!(
            graph.add_directed_edge(&a, &stranger),
            Err(GraphError::UnknownVertex { index: 1 })
        );
        assert_eq!(
            graph.add_undirected_edge(&a, &impostor),
            Err(GraphError::UnknownVertex { index: 0 })
        );
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges_from(&impostor).is_empty());
        assert!(!graph.contains_vertex(&stranger));
    }

    #[test]
    fn test_display_lists_destinations() {
        let mut graph = Graph::new();
        let a = graph.create_vertex("a");
        let b = graph.create_vertex("b");
        let c = graph.create_vertex("c");
        graph.add_directed_edge(&a, &b).unwrap();
        graph.add_directed_edge(&a, &c).unwrap();

        assert_eq!(
            graph.to_string(),
            "0:a --> [ 1:b,2:c ]\n1:b --> [  ]\n2:c --> [  ]\n"
        );
    }
}
