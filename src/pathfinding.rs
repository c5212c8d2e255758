//! All-pairs shortest paths by repeated Dijkstra over a mergeable heap
//!
//! The driver is written once against [`MergeableHeap`] and runs single-source
//! Dijkstra from every vertex, writing one row of a [`DistanceMatrix`] per
//! source. The heap's `decrease_key` is what makes the backends differ: the
//! binomial heap pays O(log n) per relaxation, the Fibonacci heap O(1)
//! amortized.
//!
//! # Design
//!
//! Per source the driver keeps a `visited` flag per vertex and a
//! vertex → handle table for vertices currently in the heap. A vertex moves
//! through three states within one source run:
//!
//! - unvisited: no handle, not visited
//! - in the heap: a handle is recorded
//! - visited: extracted, its distance is final
//!
//! Heap errors abort the whole run; the partially filled matrix is discarded.
//!
//! # Example
//!
//! ```rust
//! use apsp_heaps::fibonacci::FibonacciHeap;
//! use apsp_heaps::graph::{AdjacencyGraph, Limits};
//! use apsp_heaps::pathfinding::all_pairs;
//!
//! let mut graph = AdjacencyGraph::new(3, Limits::default()).unwrap();
//! graph.add_edge(0, 1, 7).unwrap();
//! graph.add_edge(1, 2, 2).unwrap();
//! graph.add_edge(0, 2, 10).unwrap();
//!
//! let matrix = all_pairs::<FibonacciHeap<u32>>(&graph).unwrap();
//! assert_eq!(matrix.row(0), &[0, 7, 9]);
//! assert!(!matrix.is_reachable(2, 0));
//! ```

use crate::graph::AdjacencyGraph;
use crate::matrix::{Distance, DistanceMatrix};
use crate::traits::{HeapError, MergeableHeap, Vertex};
use log::{debug, error};

/// Reusable per-source state
///
/// Allocated once per all-pairs run and reset between sources.
struct SourceState<H> {
    visited: Vec<bool>,
    handles: Vec<Option<H>>,
}

impl<H: Copy> SourceState<H> {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            handles: vec![None; vertex_count],
        }
    }

    fn reset(&mut self) {
        self.visited.fill(false);
        self.handles.fill(None);
    }
}

/// Shortest distances between every ordered pair of vertices, using heap `H`
///
/// Unreachable pairs hold `graph.limits().infinity()`.
///
/// # Errors
/// Any [`HeapError`] raised by the heap; no matrix is returned in that case.
pub fn all_pairs<H>(graph: &AdjacencyGraph) -> Result<DistanceMatrix, HeapError>
where
    H: MergeableHeap<Distance>,
{
    let n = graph.vertex_count();
    let mut matrix = DistanceMatrix::new(n, graph.limits().infinity());
    let mut state = SourceState::new(n);

    for source in 0..n {
        state.reset();
        if let Err(err) = single_source::<H>(graph, source, matrix.row_mut(source), &mut state) {
            error!("shortest-path run aborted at source {source}: {err}");
            return Err(err);
        }
    }
    Ok(matrix)
}

/// Distances from `source` to every vertex, using heap `H`
pub fn shortest_paths_from<H>(
    graph: &AdjacencyGraph,
    source: Vertex,
) -> Result<Vec<Distance>, HeapError>
where
    H: MergeableHeap<Distance>,
{
    let n = graph.vertex_count();
    if source >= n {
        return Err(HeapError::VertexOutOfRange {
            vertex: source,
            capacity: n,
        });
    }
    let mut row = vec![graph.limits().infinity(); n];
    row[source] = 0;
    single_source::<H>(graph, source, &mut row, &mut SourceState::new(n))?;
    Ok(row)
}

/// Runs Dijkstra from `source`, filling `row`
///
/// `row` must hold infinity everywhere except `row[source] == 0`.
fn single_source<H>(
    graph: &AdjacencyGraph,
    source: Vertex,
    row: &mut [Distance],
    state: &mut SourceState<H::Handle>,
) -> Result<(), HeapError>
where
    H: MergeableHeap<Distance>,
{
    let mut heap = H::with_capacity(graph.vertex_count());
    state.handles[source] = Some(heap.insert(source, 0)?);

    let mut settled = 0usize;
    let mut decreases = 0usize;

    while let Some((u, _)) = heap.extract_min()? {
        state.visited[u] = true;
        state.handles[u] = None;
        settled += 1;

        let base = row[u];
        for edge in graph.edges(u) {
            let v = edge.to;
            if state.visited[v] {
                continue;
            }
            let candidate = base.saturating_add(edge.weight);
            if candidate >= row[v] {
                continue;
            }
            row[v] = candidate;
            match state.handles[v] {
                Some(handle) => {
                    heap.decrease_key(&handle, candidate)?;
                    decreases += 1;
                }
                None => state.handles[v] = Some(heap.insert(v, candidate)?),
            }
        }
    }

    heap.destroy()?;
    debug!("source {source}: settled {settled} vertices, {decreases} decrease-key calls");
    Ok(())
}
