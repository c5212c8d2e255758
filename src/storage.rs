//! Arena storage for heap nodes
//!
//! Heap nodes live in a [`SlotMap`] owned by the heap. Parent, child and
//! sibling relations are [`NodeKey`]s into that arena rather than pointers, so
//! ring surgery is plain key rewiring and freeing a node is a slot removal.
//!
//! Keys are generational: a handle kept after its node was extracted no longer
//! resolves, which is how stale handles are detected. Keys carry no arena
//! identity, so every arena also gets a process-unique [`HeapId`] that heaps
//! stamp into their handles. A handle is only resolved by the arena whose id
//! it carries.
//!
//! [`VertexIndex`] is the per-heap residency table that enforces "at most one
//! live node per vertex".

use crate::traits::{HeapError, Vertex};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    /// Arena key of a heap node
    pub struct NodeKey;
}

/// Identity of one node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct HeapId(u64);

impl HeapId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A node stored in a [`NodeArena`]
pub(crate) trait ArenaNode {
    /// Vertex carried by the node
    fn vertex(&self) -> Vertex;

    /// Replaces every stored key `k` with `map(k)`
    ///
    /// Needed when nodes move between arenas during a meld.
    fn relink(&mut self, map: &FxHashMap<NodeKey, NodeKey>);
}

/// Bounded node arena
#[derive(Debug)]
pub(crate) struct NodeArena<N> {
    nodes: SlotMap<NodeKey, N>,
    capacity: usize,
    id: HeapId,
}

impl<N> NodeArena<N> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            capacity,
            id: HeapId::fresh(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn id(&self) -> HeapId {
        self.id
    }

    /// Key named by a handle, if the handle was issued by this arena and its
    /// node is still live
    #[inline]
    pub(crate) fn resolve(&self, heap: HeapId, key: NodeKey) -> Option<NodeKey> {
        (heap == self.id && self.nodes.contains_key(key)).then_some(key)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Allocates a node built from its own key
    ///
    /// The key is handed to `f` so a fresh node can form a one-element ring.
    pub(crate) fn insert_with_key<F>(&mut self, f: F) -> Result<NodeKey, HeapError>
    where
        F: FnOnce(NodeKey) -> N,
    {
        if self.nodes.len() >= self.capacity {
            return Err(HeapError::AllocationFailure {
                capacity: self.capacity,
            });
        }
        Ok(self.nodes.insert_with_key(f))
    }

    pub(crate) fn remove(&mut self, key: NodeKey) -> Option<N> {
        self.nodes.remove(key)
    }

    #[inline]
    pub(crate) fn get(&self, key: NodeKey) -> Option<&N> {
        self.nodes.get(key)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, key: NodeKey) -> Option<&mut N> {
        self.nodes.get_mut(key)
    }
}

/// A clone is a separate arena: handles issued by the original do not
/// resolve in it.
impl<N: Clone> Clone for NodeArena<N> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            capacity: self.capacity,
            id: HeapId::fresh(),
        }
    }
}

impl<N: ArenaNode> NodeArena<N> {
    /// Moves every node of `other` into this arena
    ///
    /// Returns the old-key to new-key mapping. Links inside the moved nodes are
    /// already rewritten when this returns. `other`'s id dies with it, so its
    /// keys never resolve here.
    pub(crate) fn absorb(
        &mut self,
        mut other: NodeArena<N>,
    ) -> Result<FxHashMap<NodeKey, NodeKey>, HeapError> {
        if self.nodes.len() + other.nodes.len() > self.capacity {
            return Err(HeapError::AllocationFailure {
                capacity: self.capacity,
            });
        }

        let mut remap = FxHashMap::default();
        remap.reserve(other.nodes.len());
        for (old, node) in other.nodes.drain() {
            remap.insert(old, self.nodes.insert(node));
        }
        for &new in remap.values() {
            self.nodes[new].relink(&remap);
        }
        Ok(remap)
    }
}

impl<N> Index<NodeKey> for NodeArena<N> {
    type Output = N;

    #[inline]
    fn index(&self, key: NodeKey) -> &N {
        &self.nodes[key]
    }
}

impl<N> IndexMut<NodeKey> for NodeArena<N> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut N {
        &mut self.nodes[key]
    }
}

/// Vertex → live node table
#[derive(Debug, Clone)]
pub(crate) struct VertexIndex {
    slots: Vec<Option<NodeKey>>,
    resident: usize,
}

impl VertexIndex {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            resident: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.resident
    }

    #[inline]
    pub(crate) fn get(&self, vertex: Vertex) -> Option<NodeKey> {
        self.slots.get(vertex).copied().flatten()
    }

    /// Checks that `vertex` is in range and not resident
    pub(crate) fn check_vacant(&self, vertex: Vertex) -> Result<(), HeapError> {
        match self.slots.get(vertex) {
            None => Err(HeapError::VertexOutOfRange {
                vertex,
                capacity: self.slots.len(),
            }),
            Some(Some(_)) => Err(HeapError::DuplicateVertex(vertex)),
            Some(None) => Ok(()),
        }
    }

    /// Records `key` as the node of `vertex`; the slot must be vacant
    pub(crate) fn claim(&mut self, vertex: Vertex, key: NodeKey) {
        debug_assert!(self.slots[vertex].is_none(), "vertex {vertex} claimed twice");
        self.slots[vertex] = Some(key);
        self.resident += 1;
    }

    pub(crate) fn release(&mut self, vertex: Vertex) {
        if let Some(slot) = self.slots.get_mut(vertex) {
            if slot.take().is_some() {
                self.resident -= 1;
            }
        }
    }

    /// Resident vertices in ascending order
    pub(crate) fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(vertex, slot)| slot.map(|_| vertex))
    }
}
