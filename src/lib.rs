//! All-pairs shortest paths over mergeable heaps
//!
//! This crate computes the distance between every ordered pair of vertices of a
//! weighted directed graph by running Dijkstra's algorithm from each vertex. The
//! priority queue behind Dijkstra is pluggable through [`MergeableHeap`].
//!
//! # Features
//!
//! - **Binomial Heap**: O(1) insert; O(log n) amortized extract_min;
//!   O(log n) decrease_key by swapping a node up past its parents
//! - **Fibonacci Heap**: O(1) insert; O(log n) amortized extract_min;
//!   O(1) amortized decrease_key via cascading cuts
//! - **Simple scheme**: O(V²) scan-based Dijkstra used as a reference
//! - **Graphs**: validated adjacency lists, an edge-list reader, a seeded random
//!   generator and a connectivity repair pass
//! - **Timing**: per-run wall time and a sweep over random graphs
//!
//! Heap nodes live in a per-heap [`slotmap`] arena, so handles are
//! generational keys and a stale handle is reported instead of dereferenced.
//!
//! # Example
//!
//! ```rust
//! use apsp_heaps::graph::{AdjacencyGraph, Limits};
//! use apsp_heaps::Scheme;
//!
//! let mut graph = AdjacencyGraph::new(4, Limits::default()).unwrap();
//! for (from, to, weight) in [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)] {
//!     graph.add_edge(from, to, weight).unwrap();
//! }
//!
//! for scheme in Scheme::ALL {
//!     let run = scheme.run(&graph).unwrap();
//!     assert_eq!(run.matrix.row(0), &[0, 3, 1, 4]);
//! }
//! ```

pub mod binomial;
pub mod fibonacci;
pub mod graph;
pub mod matrix;
pub mod pathfinding;
pub mod scheme;
pub mod simple;
mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use graph::{AdjacencyGraph, GraphError, Limits};
pub use matrix::{Distance, DistanceMatrix};
pub use scheme::{ApspRun, Scheme};
pub use traits::{Handle, HeapError, MergeableHeap, Vertex};
