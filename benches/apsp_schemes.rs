//! Comparative benchmarks of the all-pairs schemes
//!
//! Every scheme runs on the same connected random graphs, across vertex counts
//! and densities, plus raw heap workloads that isolate decrease_key.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench apsp_schemes
//! ```

use apsp_heaps::binomial::BinomialHeap;
use apsp_heaps::fibonacci::FibonacciHeap;
use apsp_heaps::graph::{AdjacencyGraph, Limits};
use apsp_heaps::{MergeableHeap, Scheme};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn connected_graph(vertices: usize, density: u32) -> AdjacencyGraph {
    let seed = ((vertices as u64) << 8) | u64::from(density);
    let mut graph = AdjacencyGraph::random(vertices, density, seed, Limits::default())
        .expect("benchmark graph parameters are within limits");
    graph
        .connect(seed + 1)
        .expect("connect only adds in-range edges");
    graph
}

fn bench_schemes_by_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("apsp_100_vertices");
    group.sample_size(10);

    for density in [10, 50, 100] {
        let graph = connected_graph(100, density);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));
        for scheme in Scheme::ALL {
            group.bench_with_input(
                BenchmarkId::new(scheme.name(), format!("{density}%")),
                &graph,
                |b, graph| b.iter(|| black_box(scheme.run(graph).expect("heap run failed"))),
            );
        }
    }
    group.finish();
}

fn bench_schemes_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("apsp_density_20");
    group.sample_size(10);

    for vertices in [50, 100, 200] {
        let graph = connected_graph(vertices, 20);
        for scheme in Scheme::ALL {
            group.bench_with_input(
                BenchmarkId::new(scheme.name(), vertices),
                &graph,
                |b, graph| b.iter(|| black_box(scheme.run(graph).expect("heap run failed"))),
            );
        }
    }
    group.finish();
}

/// Insert n, extract once, then decrease every key
fn decrease_key_workload<H: MergeableHeap<u32>>(n: usize) -> Option<(usize, u32)> {
    let mut heap = H::with_capacity(n);
    let handles: Vec<_> = (0..n)
        .map(|v| heap.insert(v, 1_000_000 + v as u32).expect("within capacity"))
        .collect();
    heap.extract_min().expect("well-formed heap");
    for (v, handle) in handles.iter().enumerate().skip(1).rev() {
        heap.decrease_key(handle, v as u32).expect("key only decreases");
    }
    heap.extract_min().expect("well-formed heap")
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    for n in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("binomial", n), &n, |b, &n| {
            b.iter(|| black_box(decrease_key_workload::<BinomialHeap<u32>>(n)))
        });
        group.bench_with_input(BenchmarkId::new("fibonacci", n), &n, |b, &n| {
            b.iter(|| black_box(decrease_key_workload::<FibonacciHeap<u32>>(n)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_schemes_by_density,
    bench_schemes_by_size,
    bench_decrease_key
);
criterion_main!(benches);
