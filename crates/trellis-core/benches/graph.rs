//! Benchmarks for the hot engine paths: edge insertion (cycle guard
//! included), topological sort, path enumeration, and weight aggregation.
//!
//! Graphs are layered: one source, `layers` ranks of `width` vertices with
//! full rank-to-rank fan-out, one sink. Path count between source and sink
//! is `width^(layers-1) * width` shaped, so enumeration sizes are kept
//! deliberately small while sort sizes go larger.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use trellis_core::{Dag, VertexId};

struct Layered {
    dag: Dag<u64>,
    source: VertexId,
    sink: VertexId,
}

fn layered(layers: usize, width: usize) -> Layered {
    let mut dag = Dag::with_capacity(layers * width + 2);
    let source = dag.add_vertex(1);

    let mut previous = vec![source];
    for _ in 0..layers {
        let rank: Vec<VertexId> = (0..width).map(|w| dag.add_vertex(w as u64)).collect();
        for &from in &previous {
            for &to in &rank {
                dag.add_edge(from, to, 1).expect("layered edge");
            }
        }
        previous = rank;
    }

    let sink = dag.add_vertex(1);
    for &from in &previous {
        dag.add_edge(from, sink, 1).expect("sink edge");
    }

    Layered { dag, source, sink }
}

fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");

    // Insertion cost is dominated by the reachability check on deep graphs.
    for layers in [16_usize, 64, 256] {
        group.bench_with_input(
            BenchmarkId::new("build_chain", layers),
            &layers,
            |b, &layers| {
                b.iter(|| {
                    let graph = layered(layers, 1);
                    black_box(graph.dag.edge_count())
                });
            },
        );
    }

    for (layers, width) in [(64_usize, 2_usize), (32, 4), (16, 8)] {
        let graph = layered(layers, width);
        group.bench_with_input(
            BenchmarkId::new("topological_ordering", format!("{layers}x{width}")),
            &graph,
            |b, graph| {
                b.iter(|| black_box(graph.dag.topological_ordering()));
            },
        );
    }

    // Enumeration and aggregation are exponential in fan-out; keep the
    // path counts in the thousands.
    for (layers, width) in [(10_usize, 2_usize), (6, 3)] {
        let graph = layered(layers, width);
        group.bench_with_input(
            BenchmarkId::new("all_paths", format!("{layers}x{width}")),
            &graph,
            |b, graph| {
                b.iter(|| black_box(graph.dag.all_paths(graph.source, graph.sink).len()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("weight_of_longest_path", format!("{layers}x{width}")),
            &graph,
            |b, graph| {
                b.iter(|| {
                    black_box(graph.dag.weight_of_longest_path(
                        graph.source,
                        graph.sink,
                        Clone::clone,
                        Clone::clone,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_graph);
criterion_main!(benches);
