//! Distance matrix produced by an all-pairs run
//!
//! Row `s` holds the shortest distances from source `s`. Unreachable pairs hold
//! the `infinity` sentinel the matrix was created with.

use crate::traits::Vertex;
use std::fmt;
use std::ops::Index;

/// Path length. Edge weights and distances share this type.
pub type Distance = u32;

/// Dense V×V distance table, one row per source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    vertex_count: usize,
    infinity: Distance,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// Creates a matrix filled with `infinity` and a zero diagonal
    pub fn new(vertex_count: usize, infinity: Distance) -> Self {
        let mut cells = vec![infinity; vertex_count * vertex_count];
        for v in 0..vertex_count {
            cells[v * vertex_count + v] = 0;
        }
        Self {
            vertex_count,
            infinity,
            cells,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Sentinel stored for unreachable pairs
    #[inline]
    pub fn infinity(&self) -> Distance {
        self.infinity
    }

    /// Distance from `from` to `to`, `None` when either is out of range
    pub fn get(&self, from: Vertex, to: Vertex) -> Option<Distance> {
        if from < self.vertex_count && to < self.vertex_count {
            Some(self.cells[from * self.vertex_count + to])
        } else {
            None
        }
    }

    /// Row of `source`
    ///
    /// # Panics
    /// If `source` is out of range.
    pub fn row(&self, source: Vertex) -> &[Distance] {
        let start = source * self.vertex_count;
        &self.cells[start..start + self.vertex_count]
    }

    /// Mutable row of `source`
    ///
    /// # Panics
    /// If `source` is out of range.
    pub fn row_mut(&mut self, source: Vertex) -> &mut [Distance] {
        let start = source * self.vertex_count;
        &mut self.cells[start..start + self.vertex_count]
    }

    /// Rows in source order
    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> {
        self.cells.chunks(self.vertex_count.max(1))
    }

    pub fn is_reachable(&self, from: Vertex, to: Vertex) -> bool {
        self.get(from, to).is_some_and(|d| d != self.infinity)
    }

    /// Ordered pairs `(from, to)` with no path
    pub fn unreachable_pairs(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = self.vertex_count;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &d)| d == self.infinity)
            .map(move |(i, _)| (i / n, i % n))
    }
}

impl Index<(Vertex, Vertex)> for DistanceMatrix {
    type Output = Distance;

    fn index(&self, (from, to): (Vertex, Vertex)) -> &Distance {
        assert!(
            from < self.vertex_count && to < self.vertex_count,
            "({from}, {to}) out of range for {} vertices",
            self.vertex_count
        );
        &self.cells[from * self.vertex_count + to]
    }
}

/// Tab-separated grid with a header row; unreachable cells print as `INF`
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nodes")?;
        for v in 0..self.vertex_count {
            write!(f, "\t{v}")?;
        }
        writeln!(f)?;
        for _ in 0..self.vertex_count {
            write!(f, "\t------")?;
        }
        writeln!(f)?;

        for (source, row) in self.rows().take(self.vertex_count).enumerate() {
            write!(f, "{source}   |")?;
            for &d in row {
                if d == self.infinity {
                    write!(f, "\tINF")?;
                } else {
                    write!(f, "\t{d}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
