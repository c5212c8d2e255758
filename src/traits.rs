//! Common traits for the vertex-keyed mergeable heaps
//!
//! Both heap engines in this crate ([`BinomialHeap`](crate::binomial::BinomialHeap)
//! and [`FibonacciHeap`](crate::fibonacci::FibonacciHeap)) implement
//! [`MergeableHeap`]. The shortest-path driver in [`crate::pathfinding`] is
//! written once against this trait.
//!
//! Every element is a graph vertex paired with a key. A heap is created with a
//! capacity that bounds both the vertex ids it accepts and the number of nodes
//! its arena may hold, and a vertex is resident at most once.

use std::fmt;
use thiserror::Error;

/// Graph vertex identifier
pub type Vertex = usize;

/// Error type for heap operations
///
/// Every variant is fatal for the shortest-path run that observed it: the heap
/// may be partially rewired and must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The node arena is full
    #[error("node arena exhausted (capacity {capacity})")]
    AllocationFailure {
        /// Maximum number of live nodes
        capacity: usize,
    },
    /// The handle does not name a node resident in this heap
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
    /// Two trees of different degree reached a combine step
    #[error("cannot combine trees of degree {left} and {right}")]
    DegreeMismatch {
        /// Degree of the tree already held in the consolidation table
        left: usize,
        /// Degree of the tree being combined into it
        right: usize,
    },
    /// `decrease_key` was asked to raise a key
    #[error("new key is greater than the current key")]
    KeyIncreased,
    /// The vertex already has a live node in this heap
    #[error("vertex {0} is already resident in the heap")]
    DuplicateVertex(Vertex),
    /// The vertex id is not below the heap capacity
    #[error("vertex {vertex} is out of range for heap capacity {capacity}")]
    VertexOutOfRange {
        /// Offending vertex id
        vertex: Vertex,
        /// Capacity the heap was created with
        capacity: usize,
    },
}

/// A handle to a node in a heap, used for `decrease_key`
///
/// Handles are non-owning and tied to the heap that issued them. A handle
/// whose node has been extracted, or that was issued by another heap, is
/// rejected with [`HeapError::InvalidHandle`].
pub trait Handle: Copy + Eq + fmt::Debug {}

/// Mergeable min-heap of `(vertex, key)` pairs
///
/// # Example
///
/// ```rust
/// use apsp_heaps::MergeableHeap;
/// use apsp_heaps::fibonacci::FibonacciHeap;
///
/// let mut heap: FibonacciHeap<u32> = FibonacciHeap::with_capacity(8);
/// let handle = heap.insert(3, 10).unwrap();
/// heap.insert(5, 7).unwrap();
/// heap.decrease_key(&handle, 2).unwrap();
/// assert_eq!(heap.find_min(), Some((3, 2)));
/// assert_eq!(heap.extract_min().unwrap(), Some((3, 2)));
/// ```
pub trait MergeableHeap<K: Ord + Copy>: Sized {
    /// The handle type for this heap
    type Handle: Handle;

    /// Creates an empty heap accepting vertex ids `0..max_vertices`
    fn with_capacity(max_vertices: usize) -> Self;

    /// Vertex-id bound and node limit this heap was created with
    fn capacity(&self) -> usize;

    /// Number of resident vertices
    fn len(&self) -> usize;

    /// Returns true if no vertex is resident
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `vertex` with `key`, returning a handle to its node
    ///
    /// # Time Complexity
    /// O(1): the node is spliced into the root ring without consolidation.
    fn insert(&mut self, vertex: Vertex, key: K) -> Result<Self::Handle, HeapError>;

    /// Returns the minimum `(vertex, key)` without removing it
    fn find_min(&self) -> Option<(Vertex, K)>;

    /// Removes and returns the minimum `(vertex, key)`
    ///
    /// Returns `Ok(None)` on an empty heap.
    ///
    /// # Time Complexity
    /// O(log n) amortized; the consolidation pass is O(number of roots).
    fn extract_min(&mut self) -> Result<Option<(Vertex, K)>, HeapError>;

    /// Lowers the key of the node behind `handle`
    ///
    /// `new_key` may equal the current key.
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] for a stale or foreign handle,
    /// [`HeapError::KeyIncreased`] when `new_key` is larger than the current key.
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError>;

    /// Moves every node of `other` into this heap
    ///
    /// Handles issued by `other` are invalidated; [`MergeableHeap::handle_of`]
    /// gives the new ones. Fails without modifying either heap when the two
    /// share a vertex or the combined size exceeds this heap's capacity.
    ///
    /// # Time Complexity
    /// O(m) for the m nodes of `other`. Each heap owns its node arena, so
    /// `other`'s nodes are copied over before the O(1) root ring splice.
    fn meld(&mut self, other: Self) -> Result<(), HeapError>;

    /// Current key of the node behind `handle`, or `None` if it is gone
    fn key_of(&self, handle: &Self::Handle) -> Option<K>;

    /// Handle of the live node for `vertex`, if resident
    fn handle_of(&self, vertex: Vertex) -> Option<Self::Handle>;

    /// Returns true if `vertex` is resident
    fn contains(&self, vertex: Vertex) -> bool {
        self.handle_of(vertex).is_some()
    }

    /// Tears the heap down by extracting until no vertex is resident
    fn destroy(mut self) -> Result<(), HeapError> {
        while !self.is_empty() {
            self.extract_min()?;
        }
        Ok(())
    }
}
