//! Path searches over anything that can list a vertex's outgoing edges.
//!
//! Both searches run on the crate's own containers: breadth-first search uses
//! [`Queue`] as its frontier and depth-first search keeps its path on an
//! explicit [`Stack`] instead of the call stack.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::collections::linear::{Queue, Stack};
use crate::graph::access::visited::VisitedSet;
use crate::graph::basic::adjacency_graph::{Edge, Graph, Vertex};
use crate::macros::trace_event;

/// How breadth-first search first reached a vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visit<T> {
    /// The vertex the search started from.
    Source,
    /// Reached by following this edge.
    Edge(Edge<T>),
}

/// A graph that can list the outgoing edges of a vertex.
///
/// Implementors get [`bfs`](Adjacency::bfs) and [`dfs`](Adjacency::dfs) for free.
pub trait Adjacency {
    /// Vertex payload type.
    type Element: Clone + Eq + Hash;

    /// Outgoing edges of `vertex` in insertion order; empty for unknown vertices.
    fn edges_from(&self, vertex: &Vertex<Self::Element>) -> &[Edge<Self::Element>];

    /// Shortest path by edge count. See [`breadth_first_search`].
    fn bfs(
        &self,
        source: &Vertex<Self::Element>,
        destination: &Vertex<Self::Element>,
    ) -> Option<Vec<Edge<Self::Element>>> {
        breadth_first_search(self, source, destination)
    }

    /// First path found depth-first. See [`depth_first_search`].
    fn dfs(
        &self,
        source: &Vertex<Self::Element>,
        destination: &Vertex<Self::Element>,
    ) -> Stack<Vertex<Self::Element>> {
        depth_first_search(self, source, destination)
    }
}

impl<T: Clone + Eq + Hash> Adjacency for Graph<T> {
    type Element = T;

    fn edges_from(&self, vertex: &Vertex<T>) -> &[Edge<T>] {
        Graph::edges_from(self, vertex)
    }
}

/// Finds a shortest path (fewest edges) from `source` to `destination`.
///
/// Returns the edges of the path in order from `source` to `destination`, an
/// empty path when the two are equal, or `None` when `destination` cannot be
/// reached.
///
/// Every vertex enters the frontier at most once, the first time it is seen,
/// and that first sighting is along a shortest route because vertices leave
/// the frontier in order of distance. \(O(V + E)\).
pub fn breadth_first_search<G>(
    graph: &G,
    source: &Vertex<G::Element>,
    destination: &Vertex<G::Element>,
) -> Option<Vec<Edge<G::Element>>>
where
    G: Adjacency + ?Sized,
{
    trace_event!(
        trace,
        source = source.index(),
        destination = destination.index(),
        "bfs start"
    );

    let mut frontier = Queue::new();
    let mut visits: HashMap<Vertex<G::Element>, Visit<G::Element>> = HashMap::new();
    frontier.enqueue(source.clone());
    visits.insert(source.clone(), Visit::Source);

    while let Some(vertex) = frontier.dequeue() {
        if vertex == *destination {
            let route = route_to(&visits, destination);
            trace_event!(trace, hops = route.len(), visited = visits.len(), "bfs found path");
            return Some(route);
        }

        for edge in graph.edges_from(&vertex) {
            let next = edge.destination();
            if !visits.contains_key(next) {
                visits.insert(next.clone(), Visit::Edge(edge.clone()));
                frontier.enqueue(next.clone());
            }
        }
    }

    trace_event!(trace, visited = visits.len(), "bfs exhausted frontier");
    None
}

/// Walks the visit records back from `destination` to the source.
fn route_to<T: Clone + Eq + Hash>(
    visits: &HashMap<Vertex<T>, Visit<T>>,
    destination: &Vertex<T>,
) -> Vec<Edge<T>> {
    let mut route = Vec::new();
    let mut vertex = destination;
    while let Some(Visit::Edge(edge)) = visits.get(vertex) {
        route.push(edge.clone());
        vertex = edge.source();
    }
    route.reverse();
    route
}

/// Finds *a* path from `source` to `destination` by depth-first descent.
///
/// The returned stack holds the path with `source` at the bottom and
/// `destination` on top; it is empty when no path exists. When
/// `source == destination` it holds just that vertex.
///
/// At each step the search follows the first outgoing edge of the top vertex,
/// in insertion order, that leads to a vertex not yet visited. If there is
/// none it pops the top vertex and backtracks. Each vertex is pushed at most
/// once, so cycles cannot trap the search. The path is the first one found
/// in this order and is not necessarily the shortest; use
/// [`breadth_first_search`] for that.
pub fn depth_first_search<G>(
    graph: &G,
    source: &Vertex<G::Element>,
    destination: &Vertex<G::Element>,
) -> Stack<Vertex<G::Element>>
where
    G: Adjacency + ?Sized,
{
    trace_event!(
        trace,
        source = source.index(),
        destination = destination.index(),
        "dfs start"
    );

    let mut visited = VisitedSet::new();
    let mut stack = Stack::new();
    visited.try_visit(source);
    stack.push(source.clone());

    while let Some(top) = stack.peek() {
        if top == destination {
            trace_event!(trace, depth = stack.len(), "dfs found path");
            break;
        }

        let next = graph
            .edges_from(top)
            .iter()
            .map(Edge::destination)
            .find(|v| !visited.is_visited(*v))
            .cloned();

        match next {
            Some(vertex) => {
                visited.try_visit(&vertex);
                trace_event!(trace, index = vertex.index(), depth = stack.len(), "dfs descend");
                stack.push(vertex);
            }
            None => {
                trace_event!(trace, index = top.index(), "dfs backtrack");
                stack.pop();
            }
        }
    }

    stack
}
