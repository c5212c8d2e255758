//! Weighted directed graphs for the all-pairs runs
//!
//! [`AdjacencyGraph`] stores, per vertex, its out-edges in insertion order.
//! Every edge is validated against a [`Limits`] value when it is added, so the
//! shortest-path code can assume in-range vertices and weights.
//!
//! Graphs come from three places:
//! - [`AdjacencyGraph::add_edge`] on a graph built with [`AdjacencyGraph::new`]
//! - [`AdjacencyGraph::parse_edge_list`], one `"<from> <to> <weight>"` per line
//! - [`AdjacencyGraph::random`], a seeded generator by vertex count and density
//!
//! [`AdjacencyGraph::connect`] then adds edges until every vertex reaches every
//! other one.

use crate::matrix::Distance;
use crate::simple;
use crate::traits::Vertex;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Bounds on graph size and edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Exclusive upper bound on edge weights
    pub max_edge_cost: Distance,
    /// Largest vertex count a graph may have
    pub max_vertices: usize,
}

impl Limits {
    /// Sentinel distance for unreachable pairs: `max_edge_cost * max_vertices`
    ///
    /// Strictly larger than any simple path length.
    pub fn infinity(&self) -> Distance {
        let vertices = Distance::try_from(self.max_vertices).unwrap_or(Distance::MAX);
        self.max_edge_cost.saturating_mul(vertices)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_edge_cost: 1000,
            max_vertices: 500,
        }
    }
}

/// Rejected graph input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange {
        /// Offending endpoint
        vertex: Vertex,
        /// Number of vertices in the graph
        vertex_count: usize,
    },
    /// An edge weight is zero or not below the cost limit
    #[error("edge weight {weight} is outside 1..{max_edge_cost}")]
    WeightOutOfRange {
        /// Offending weight
        weight: Distance,
        /// Exclusive upper bound from [`Limits`]
        max_edge_cost: Distance,
    },
    /// The graph would exceed [`Limits::max_vertices`]
    #[error("{requested} vertices exceed the limit of {max_vertices}")]
    TooManyVertices {
        /// Vertex count asked for
        requested: usize,
        /// Limit the graph was built with
        max_vertices: usize,
    },
    /// A random-graph density above 100%
    #[error("density {0}% is not a percentage")]
    InvalidDensity(u32),
    /// `max_edge_cost` below 2, so no weight fits in `1..max_edge_cost`
    #[error("max edge cost {0} leaves no valid weight")]
    InvalidLimits(Distance),
}

/// Out-edge of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: Vertex,
    pub weight: Distance,
}

/// Directed graph as per-vertex out-edge lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
    limits: Limits,
}

impl AdjacencyGraph {
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize, limits: Limits) -> Result<Self, GraphError> {
        if limits.max_edge_cost < 2 {
            return Err(GraphError::InvalidLimits(limits.max_edge_cost));
        }
        if vertex_count > limits.max_vertices {
            return Err(GraphError::TooManyVertices {
                requested: vertex_count,
                max_vertices: limits.max_vertices,
            });
        }
        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
            limits,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Out-edges of `vertex` in insertion order; empty for unknown vertices
    pub fn edges(&self, vertex: Vertex) -> &[Edge] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.edges(from).iter().any(|e| e.to == to)
    }

    /// Appends the edge `from -> to`
    ///
    /// Parallel edges are kept; the shortest one wins during relaxation.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, weight: Distance) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        for vertex in [from, to] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        if weight == 0 || weight >= self.limits.max_edge_cost {
            return Err(GraphError::WeightOutOfRange {
                weight,
                max_edge_cost: self.limits.max_edge_cost,
            });
        }
        self.adjacency[from].push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Reads an edge list
    ///
    /// Each line is `"<from> <to> <weight>"`. Reading stops at the first line
    /// starting with `*`. Lines that do not parse, or whose vertices or weight
    /// are out of range for `limits`, are skipped. The vertex count is one more
    /// than the largest vertex on an accepted line.
    pub fn parse_edge_list(text: &str, limits: Limits) -> Result<Self, GraphError> {
        let mut accepted = Vec::new();
        for (number, line) in text.lines().enumerate() {
            if line.starts_with('*') {
                break;
            }
            match parse_line(line, &limits) {
                Some(edge) => accepted.push(edge),
                None if line.trim().is_empty() => {}
                None => debug!("skipping edge list line {}: {:?}", number + 1, line),
            }
        }

        let vertex_count = accepted
            .iter()
            .map(|&(from, to, _)| from.max(to) + 1)
            .max()
            .unwrap_or(0);
        let mut graph = Self::new(vertex_count, limits)?;
        for (from, to, weight) in accepted {
            graph.add_edge(from, to, weight)?;
        }
        info!(
            "read graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Generates a random graph
    ///
    /// Draws `V·(V−1)·density_percent/100` distinct non-loop edges with weights
    /// in `1..max_edge_cost`. The same seed always yields the same graph.
    pub fn random(
        vertex_count: usize,
        density_percent: u32,
        seed: u64,
        limits: Limits,
    ) -> Result<Self, GraphError> {
        if density_percent > 100 {
            return Err(GraphError::InvalidDensity(density_percent));
        }
        let mut graph = Self::new(vertex_count, limits)?;
        let slots = vertex_count * vertex_count.saturating_sub(1);
        let wanted = slots * density_percent as usize / 100;

        info!(
            "building random graph with {vertex_count} vertices and {density_percent}% density ({wanted} edges)"
        );

        let mut rng = StdRng::seed_from_u64(seed);
        for slot in index::sample(&mut rng, slots, wanted) {
            let (from, to) = pair_of_slot(slot, vertex_count);
            let weight = rng.random_range(1..limits.max_edge_cost);
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds edges until every vertex reaches every other vertex
    ///
    /// First every vertex without out-edges gets one to a random other vertex.
    /// Then all-pairs distances are computed and every unreachable pair gets a
    /// direct edge of random weight, repeated until no pair is unreachable.
    /// Returns the number of edges added.
    pub fn connect(&mut self, seed: u64) -> Result<usize, GraphError> {
        let n = self.vertex_count();
        if n < 2 {
            return Ok(0);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let max_edge_cost = self.limits.max_edge_cost;
        let mut added = 0;

        for vertex in 0..n {
            if self.adjacency[vertex].is_empty() {
                // Uniform over the other n - 1 vertices
                let mut to = rng.random_range(0..n - 1);
                if to >= vertex {
                    to += 1;
                }
                self.add_edge(vertex, to, rng.random_range(1..max_edge_cost))?;
                added += 1;
            }
        }

        loop {
            let missing: Vec<(Vertex, Vertex)> =
                simple::all_pairs(self).unreachable_pairs().collect();
            if missing.is_empty() {
                break;
            }
            debug!("adding {} edges for unreachable pairs", missing.len());
            for (from, to) in missing {
                self.add_edge(from, to, rng.random_range(1..max_edge_cost))?;
                added += 1;
            }
        }

        if added == 0 {
            info!("graph is already strongly connected");
        } else {
            info!("connected graph by adding {added} edges");
        }
        Ok(added)
    }
}

fn parse_line(line: &str, limits: &Limits) -> Option<(Vertex, Vertex, Distance)> {
    let mut fields = line.split_whitespace();
    let from: Vertex = fields.next()?.parse().ok()?;
    let to: Vertex = fields.next()?.parse().ok()?;
    let weight: Distance = fields.next()?.parse().ok()?;

    let in_range = from < limits.max_vertices
        && to < limits.max_vertices
        && (1..limits.max_edge_cost).contains(&weight);
    in_range.then_some((from, to, weight))
}

/// Maps `0..n(n-1)` onto ordered pairs of distinct vertices
fn pair_of_slot(slot: usize, n: usize) -> (Vertex, Vertex) {
    let from = slot / (n - 1);
    let offset = slot % (n - 1);
    let to = if offset >= from { offset + 1 } else { offset };
    (from, to)
}
