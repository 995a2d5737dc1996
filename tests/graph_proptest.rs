//! Random graphs checked against `petgraph`.

use classic_dsa::{Adjacency, Graph, Vertex};
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

const MAX_VERTICES: usize = 24;

/// Vertex count, edge list, and a (source, destination) query.
fn graph_case() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, usize, usize)> {
    (1..MAX_VERTICES).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..n * 3),
            0..n,
            0..n,
        )
    })
}

fn build(n: usize, edges: &[(usize, usize)]) -> (Graph<usize>, Vec<Vertex<usize>>, DiGraph<(), ()>) {
    let mut graph = Graph::with_capacity(n);
    let vertices: Vec<_> = (0..n).map(|i| graph.create_vertex(i)).collect();
    let mut reference = DiGraph::new();
    for _ in 0..n {
        reference.add_node(());
    }
    for &(a, b) in edges {
        graph.add_directed_edge(&vertices[a], &vertices[b]).unwrap();
        reference.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
    }
    (graph, vertices, reference)
}

proptest! {
    #[test]
    fn test_bfs_path_length_matches_petgraph((n, edges, s, d) in graph_case()) {
        let (graph, v, reference) = build(n, &edges);
        let distances = dijkstra(&reference, NodeIndex::new(s), None, |_| 1usize);
        let expected = distances.get(&NodeIndex::new(d)).copied();

        let path = graph.bfs(&v[s], &v[d]);
        prop_assert_eq!(path.as_ref().map(Vec::len), expected);

        if let Some(path) = path {
            let mut at = &v[s];
            for edge in &path {
                prop_assert_eq!(edge.source(), at);
                prop_assert!(graph.edges_from(at).contains(edge));
                at = edge.destination();
            }
            prop_assert_eq!(at, &v[d]);
        }
    }

    #[test]
    fn test_dfs_finds_a_valid_simple_path((n, edges, s, d) in graph_case()) {
        let (graph, v, reference) = build(n, &edges);
        let reachable = dijkstra(&reference, NodeIndex::new(s), None, |_| 1usize)
            .contains_key(&NodeIndex::new(d));

        let path = graph.dfs(&v[s], &v[d]).into_vec();
        prop_assert_eq!(!path.is_empty(), reachable);

        if reachable {
            prop_assert_eq!(path.first(), Some(&v[s]));
            prop_assert_eq!(path.last(), Some(&v[d]));
            for pair in path.windows(2) {
                prop_assert!(
                    graph.edges_from(&pair[0]).iter().any(|e| *e.destination() == pair[1]),
                    "no edge {} -> {}", pair[0], pair[1]
                );
            }
            let mut seen: Vec<_> = path.iter().map(Vertex::index).collect();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), path.len());
        }
    }

    #[test]
    fn test_undirected_edges_are_symmetric((n, edges, _s, _d) in graph_case()) {
        let mut graph = Graph::new();
        let v: Vec<_> = (0..n).map(|i| graph.create_vertex(i)).collect();
        for &(a, b) in &edges {
            graph.add_undirected_edge(&v[a], &v[b]).unwrap();
        }
        prop_assert_eq!(graph.edge_count(), edges.len() * 2);
        for &(a, b) in &edges {
            prop_assert!(graph.edges_from(&v[a]).iter().any(|e| *e.destination() == v[b]));
            prop_assert!(graph.edges_from(&v[b]).iter().any(|e| *e.destination() == v[a]));
        }
        for (a, b) in (0..n).zip((0..n).rev()) {
            prop_assert_eq!(
                graph.bfs(&v[a], &v[b]).map(|p| p.len()),
                graph.bfs(&v[b], &v[a]).map(|p| p.len())
            );
        }
    }
}
