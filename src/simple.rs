//! Scan-based Dijkstra without a priority queue
//!
//! Each step picks the unvisited vertex with the smallest finite tentative
//! distance by a linear scan, so a single source costs O(V² + E). It needs no
//! heap and serves as the reference the heap-driven runs are checked against.

use crate::graph::AdjacencyGraph;
use crate::matrix::{Distance, DistanceMatrix};
use crate::traits::Vertex;
use log::debug;

/// Shortest distances between every ordered pair of vertices
pub fn all_pairs(graph: &AdjacencyGraph) -> DistanceMatrix {
    let n = graph.vertex_count();
    let infinity = graph.limits().infinity();
    let mut matrix = DistanceMatrix::new(n, infinity);
    let mut visited = vec![false; n];

    for source in 0..n {
        visited.fill(false);
        single_source(graph, source, matrix.row_mut(source), &mut visited, infinity);
    }
    matrix
}

/// Fills `row` with distances from `source`
///
/// `row` must start as infinity everywhere except `row[source] == 0`.
fn single_source(
    graph: &AdjacencyGraph,
    source: Vertex,
    row: &mut [Distance],
    visited: &mut [bool],
    infinity: Distance,
) {
    while let Some(closest) = closest_unvisited(row, visited, infinity) {
        visited[closest] = true;
        let base = row[closest];
        for edge in graph.edges(closest) {
            if visited[edge.to] {
                continue;
            }
            let candidate = base.saturating_add(edge.weight);
            if candidate < row[edge.to] {
                row[edge.to] = candidate;
            }
        }
    }
    debug!(
        "simple scan settled {} vertices from source {source}",
        visited.iter().filter(|&&v| v).count()
    );
}

fn closest_unvisited(row: &[Distance], visited: &[bool], infinity: Distance) -> Option<Vertex> {
    row.iter()
        .zip(visited)
        .enumerate()
        .filter(|&(_, (&d, &seen))| !seen && d < infinity)
        .min_by_key(|&(_, (&d, _))| d)
        .map(|(v, _)| v)
}
