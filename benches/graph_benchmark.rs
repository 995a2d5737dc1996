use classic_dsa::{Adjacency, Graph, Vertex};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, Dfs};

// Binary-tree shape plus a back edge every 7 nodes, so searches meet cycles.
fn edges(size: usize) -> Vec<(usize, usize)> {
    let mut edges: Vec<_> = (1..size).map(|i| (i / 2, i)).collect();
    edges.extend((7..size).step_by(7).map(|i| (i, i / 7)));
    edges
}

fn build_graph(size: usize) -> (Graph<usize>, Vec<Vertex<usize>>) {
    let mut graph = Graph::with_capacity(size);
    let nodes: Vec<_> = (0..size).map(|i| graph.create_vertex(i)).collect();
    for (a, b) in edges(size) {
        graph.add_directed_edge(&nodes[a], &nodes[b]).unwrap();
    }
    (graph, nodes)
}

fn build_petgraph(size: usize) -> DiGraph<usize, ()> {
    let mut graph = DiGraph::with_capacity(size, size * 2);
    for i in 0..size {
        graph.add_node(i);
    }
    for (a, b) in edges(size) {
        graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
    }
    graph
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("adjacency_graph", size), &size, |b, &size| {
            b.iter(|| black_box(build_graph(size)));
        });
        group.bench_with_input(BenchmarkId::new("petgraph", size), &size, |b, &size| {
            b.iter(|| black_box(build_petgraph(size)));
        });
    }
    group.finish();
}

fn bench_graph_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_bfs");
    for size in [100, 1_000, 10_000] {
        let (graph, nodes) = build_graph(size);
        let reference = build_petgraph(size);
        let target = size - 1;

        group.bench_with_input(BenchmarkId::new("adjacency_graph", size), &size, |b, _| {
            b.iter(|| black_box(graph.bfs(&nodes[0], &nodes[target])));
        });
        group.bench_with_input(BenchmarkId::new("petgraph", size), &size, |b, _| {
            b.iter(|| {
                let mut bfs = Bfs::new(&reference, NodeIndex::new(0));
                let mut steps = 0usize;
                while let Some(node) = bfs.next(&reference) {
                    steps += 1;
                    if node.index() == target {
                        break;
                    }
                }
                black_box(steps)
            });
        });
    }
    group.finish();
}

fn bench_graph_dfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_dfs");
    for size in [100, 1_000, 10_000] {
        let (graph, nodes) = build_graph(size);
        let reference = build_petgraph(size);
        let target = size - 1;

        group.bench_with_input(BenchmarkId::new("adjacency_graph", size), &size, |b, _| {
            b.iter(|| black_box(graph.dfs(&nodes[0], &nodes[target]).len()));
        });
        group.bench_with_input(BenchmarkId::new("petgraph", size), &size, |b, _| {
            b.iter(|| {
                let mut dfs = Dfs::new(&reference, NodeIndex::new(0));
                let mut steps = 0usize;
                while let Some(node) = dfs.next(&reference) {
                    steps += 1;
                    if node.index() == target {
                        break;
                    }
                }
                black_box(steps)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_graph_build, bench_graph_bfs, bench_graph_dfs);
criterion_main!(benches);
