//! Builds a small route map and compares breadth-first and depth-first search.
//!
//! Run with search events visible:
//!
//! ```text
//! RUST_LOG=classic_dsa=trace cargo run --example graph_search --features tracing
//! ```

use anyhow::{Context, Result};
use classic_dsa::{Adjacency, EdgeKind, Graph};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("classic_dsa=debug".parse()?),
        )
        .init();

    let mut graph = Graph::new();
    let singapore = graph.create_vertex("Singapore");
    let tokyo = graph.create_vertex("Tokyo");
    let hong_kong = graph.create_vertex("Hong Kong");
    let detroit = graph.create_vertex("Detroit");
    let san_francisco = graph.create_vertex("San Francisco");
    let washington = graph.create_vertex("Washington DC");
    let austin = graph.create_vertex("Austin Texas");
    let seattle = graph.create_vertex("Seattle");

    let routes = [
        (&singapore, &hong_kong),
        (&singapore, &san_francisco),
        (&tokyo, &hong_kong),
        (&tokyo, &detroit),
        (&tokyo, &washington),
        (&hong_kong, &san_francisco),
        (&detroit, &austin),
        (&austin, &washington),
        (&san_francisco, &washington),
        (&washington, &seattle),
        (&san_francisco, &seattle),
        (&austin, &san_francisco),
    ];
    for (a, b) in routes {
        graph.add_edge(EdgeKind::Undirected, a, b)?;
    }

    println!("{graph}");

    let path = graph
        .bfs(&singapore, &seattle)
        .context("Seattle should be reachable from Singapore")?;
    println!("BFS, {} hops:", path.len());
    for edge in &path {
        println!("  {edge}");
    }

    let route = graph.dfs(&tokyo, &austin);
    let stops: Vec<_> = route.as_slice().iter().map(|v| *v.data()).collect();
    println!("DFS: {}", stops.join(" -> "));

    // A vertex from another graph is rejected rather than silently ignored.
    let mut other = Graph::new();
    let stranger = other.create_vertex("Reykjavik");
    if let Err(err) = graph.add_directed_edge(&stranger, &seattle) {
        println!("rejected: {err}");
    }

    Ok(())
}
