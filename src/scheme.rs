//! Runtime choice of shortest-path backend, with timing
//!
//! [`Scheme`] selects between the scan-based reference and the two heap-driven
//! runs. [`Scheme::run`] times a full all-sources computation. [`sweep`] times
//! every scheme over a grid of random graphs and averages repeated runs.

use crate::binomial::BinomialHeap;
use crate::fibonacci::FibonacciHeap;
use crate::graph::{AdjacencyGraph, GraphError, Limits};
use crate::matrix::{Distance, DistanceMatrix};
use crate::traits::HeapError;
use crate::{pathfinding, simple};
use log::info;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Shortest-path backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Linear scan for the closest vertex, no heap
    Simple,
    /// Dijkstra over [`BinomialHeap`]
    Binomial,
    /// Dijkstra over [`FibonacciHeap`]
    Fibonacci,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::Simple, Scheme::Binomial, Scheme::Fibonacci];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Simple => "simple",
            Scheme::Binomial => "binomial",
            Scheme::Fibonacci => "fibonacci",
        }
    }

    /// Computes all-pairs distances and measures the wall time
    pub fn run(self, graph: &AdjacencyGraph) -> Result<ApspRun, HeapError> {
        let start = Instant::now();
        let matrix = match self {
            Scheme::Simple => simple::all_pairs(graph),
            Scheme::Binomial => pathfinding::all_pairs::<BinomialHeap<Distance>>(graph)?,
            Scheme::Fibonacci => pathfinding::all_pairs::<FibonacciHeap<Distance>>(graph)?,
        };
        let run = ApspRun {
            matrix,
            elapsed: start.elapsed(),
        };
        info!(
            "{self} scheme: {} vertices, {} edges in {} ms",
            graph.vertex_count(),
            graph.edge_count(),
            run.elapsed_millis()
        );
        Ok(run)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized scheme name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheme `{0}` (expected simple, binomial or fibonacci)")]
pub struct ParseSchemeError(String);

impl FromStr for Scheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSchemeError(s.to_owned()))
    }
}

/// Result of one timed all-pairs run
#[derive(Debug, Clone)]
pub struct ApspRun {
    pub matrix: DistanceMatrix,
    pub elapsed: Duration,
}

impl ApspRun {
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Failure while generating or solving a sweep graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SweepError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Heap(#[from] HeapError),
}

/// Grid of random graphs timed by [`sweep`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub vertex_counts: Vec<usize>,
    pub densities: Vec<u32>,
    /// Runs averaged per scheme and graph
    pub runs: u32,
    pub seed: u64,
    pub limits: Limits,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            vertex_counts: vec![100, 200, 300, 500],
            densities: (1..=10).map(|d| d * 10).collect(),
            runs: 5,
            seed: 0,
            limits: Limits::default(),
        }
    }
}

/// Average milliseconds per scheme, vertex count and density
#[derive(Debug, Clone)]
pub struct SweepReport {
    config: SweepConfig,
    /// `[scheme][vertex_count index][density index]`
    millis: Vec<Vec<Vec<u128>>>,
}

impl SweepReport {
    /// Average time of `scheme` on the graph at the given grid position
    pub fn average_millis(&self, scheme: Scheme, vertices: usize, density: usize) -> Option<u128> {
        let s = Scheme::ALL.iter().position(|&x| x == scheme)?;
        self.millis.get(s)?.get(vertices)?.get(density).copied()
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }
}

/// One table per scheme: rows are vertex counts, columns densities
impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (scheme, table) in Scheme::ALL.iter().zip(&self.millis) {
            writeln!(f, "{} scheme (ms)", scheme.name().to_uppercase())?;
            write!(f, "V\\D")?;
            for density in &self.config.densities {
                write!(f, "\t{density}%")?;
            }
            writeln!(f)?;
            for (vertices, row) in self.config.vertex_counts.iter().zip(table) {
                write!(f, "{vertices}")?;
                for ms in row {
                    write!(f, "\t{ms}")?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Times every scheme on a connected random graph per grid cell
///
/// Each cell's graph is generated once (seeded from `config.seed` and its grid
/// position), connected, and then solved `config.runs` times per scheme.
pub fn sweep(config: SweepConfig) -> Result<SweepReport, SweepError> {
    let runs = config.runs.max(1);
    let mut millis =
        vec![vec![vec![0u128; config.densities.len()]; config.vertex_counts.len()]; Scheme::ALL.len()];

    for (i, &vertices) in config.vertex_counts.iter().enumerate() {
        for (j, &density) in config.densities.iter().enumerate() {
            let seed = config.seed ^ (((i as u64) << 32) | j as u64);
            let mut graph = AdjacencyGraph::random(vertices, density, seed, config.limits)?;
            graph.connect(seed.wrapping_add(1))?;

            for (s, scheme) in Scheme::ALL.into_iter().enumerate() {
                let mut total = 0u128;
                for _ in 0..runs {
                    total += scheme.run(&graph)?.elapsed_millis();
                }
                millis[s][i][j] = total / u128::from(runs);
            }
        }
    }

    Ok(SweepReport { config, millis })
}
