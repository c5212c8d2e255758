//! Tests for the all-pairs runs
//!
//! Tests cover:
//! - Hand-checked graphs under every scheme
//! - Edge cases (single vertex, unreachable pairs, parallel edges, cycles)
//! - Agreement between the heap-driven runs and the scan-based reference
//! - Graphs read from text and generated at random

use apsp_heaps::binomial::BinomialHeap;
use apsp_heaps::fibonacci::FibonacciHeap;
use apsp_heaps::graph::{AdjacencyGraph, Limits};
use apsp_heaps::pathfinding::{all_pairs, shortest_paths_from};
use apsp_heaps::{Distance, DistanceMatrix, Scheme};

fn build(vertex_count: usize, edges: &[(usize, usize, Distance)]) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(vertex_count, Limits::default()).unwrap();
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

fn run_all(graph: &AdjacencyGraph) -> Vec<DistanceMatrix> {
    Scheme::ALL
        .into_iter()
        .map(|scheme| scheme.run(graph).unwrap().matrix)
        .collect()
}

// ============================================================================
// Hand-checked graphs
// ============================================================================

#[test]
fn test_relaxation_through_cheaper_detour() {
    let graph = build(4, &[(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)]);
    for matrix in run_all(&graph) {
        assert_eq!(matrix.row(0), &[0, 3, 1, 4]);
        assert_eq!(matrix[(2, 3)], 3);
        assert!(!matrix.is_reachable(3, 0));
    }
}

#[test]
fn test_single_vertex() {
    let graph = build(1, &[]);
    for matrix in run_all(&graph) {
        assert_eq!(matrix.vertex_count(), 1);
        assert_eq!(matrix.row(0), &[0]);
    }
}

#[test]
fn test_empty_graph() {
    let graph = build(0, &[]);
    for matrix in run_all(&graph) {
        assert_eq!(matrix.vertex_count(), 0);
    }
}

#[test]
fn test_disconnected_pair() {
    let graph = build(2, &[]);
    let infinity = Limits::default().infinity();
    for matrix in run_all(&graph) {
        assert_eq!(matrix[(0, 1)], infinity);
        assert_eq!(matrix[(1, 0)], infinity);
        assert_eq!(matrix.unreachable_pairs().count(), 2);
    }
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let graph = build(2, &[(0, 1, 9), (0, 1, 3), (0, 1, 5)]);
    for matrix in run_all(&graph) {
        assert_eq!(matrix[(0, 1)], 3);
    }
}

#[test]
fn test_cycle() {
    let graph = build(5, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 0, 1)]);
    for matrix in run_all(&graph) {
        for s in 0..5 {
            for t in 0..5 {
                assert_eq!(matrix[(s, t)] as usize, (t + 5 - s) % 5);
            }
        }
    }
}

#[test]
fn test_many_decrease_keys_on_one_vertex() {
    // Every edge into the sink improves its distance
    let n = 30;
    let mut edges = Vec::new();
    for v in 1..n - 1 {
        edges.push((0, v, v as Distance));
        edges.push((v, n - 1, (3 * n - 3 * v) as Distance));
    }
    let graph = build(n, &edges);
    for matrix in run_all(&graph) {
        assert_eq!(matrix[(0, n - 1)], (n - 2 + 3 * 2) as Distance);
    }
}

#[test]
fn test_single_source_rows_match_matrix() {
    let graph = AdjacencyGraph::random(25, 20, 99, Limits::default()).unwrap();
    let matrix = all_pairs::<BinomialHeap<Distance>>(&graph).unwrap();
    for source in 0..25 {
        let row = shortest_paths_from::<FibonacciHeap<Distance>>(&graph, source).unwrap();
        assert_eq!(row.as_slice(), matrix.row(source));
    }
}

// ============================================================================
// Input sources
// ============================================================================

#[test]
fn test_edge_list_input() {
    let text = "0 1 4\n0 2 1\n2 1 2\n1 3 1\n2 3 5\n*\n";
    let graph = AdjacencyGraph::parse_edge_list(text, Limits::default()).unwrap();
    for matrix in run_all(&graph) {
        assert_eq!(matrix.row(0), &[0, 3, 1, 4]);
    }
}

#[test]
fn test_random_graphs_agree() {
    for (vertices, density, seed) in [(10, 10, 1), (40, 30, 2), (60, 5, 3), (80, 90, 4)] {
        let graph = AdjacencyGraph::random(vertices, density, seed, Limits::default()).unwrap();
        let matrices = run_all(&graph);
        assert_eq!(matrices[0], matrices[1], "binomial differs for seed {seed}");
        assert_eq!(matrices[0], matrices[2], "fibonacci differs for seed {seed}");
    }
}

#[test]
fn test_connected_random_graph_has_no_infinity() {
    let mut graph = AdjacencyGraph::random(50, 3, 17, Limits::default()).unwrap();
    graph.connect(18).unwrap();
    for matrix in run_all(&graph) {
        assert_eq!(matrix.unreachable_pairs().count(), 0);
    }
}

#[test]
fn test_display_of_result() {
    let graph = build(2, &[(0, 1, 6)]);
    let text = Scheme::Fibonacci.run(&graph).unwrap().matrix.to_string();
    assert!(text.contains("0   |\t0\t6"));
    assert!(text.contains("1   |\tINF\t0"));
}
