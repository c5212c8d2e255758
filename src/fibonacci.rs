//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a collection of heap-ordered trees with:
//! - O(1) insert and find_min
//! - O(m) meld, moving the other heap's m nodes into this arena
//! - O(1) amortized decrease_key
//! - O(log n) amortized extract_min
//!
//! # Algorithm Overview
//!
//! Roots, and the children of every node, live in doubly linked circular rings.
//! The heap keeps a key to the minimum root.
//!
//! **Key Operations**:
//! - **Insert**: add a single-node tree to the root ring
//! - **Meld**: concatenate the two root rings
//! - **Extract-min**: promote the minimum's children to roots, remove it, then
//!   consolidate so that no two roots share a degree
//! - **Decrease-key**: if heap order breaks, cut the node to the root ring and
//!   cascade cuts up through marked ancestors
//!
//! # Marking
//!
//! A non-root node is marked once it has lost a child since it last became a
//! child. Losing a second child cuts the node too (cascading cut). This keeps
//! a tree of root degree d at least F(d+2) nodes large, so degrees stay below
//! log_φ n. Roots are never marked: cutting a node and linking a node both
//! clear its mark.

use crate::storage::{ArenaNode, HeapId, NodeArena, NodeKey, VertexIndex};
use crate::traits::{Handle, HeapError, MergeableHeap, Vertex};
use log::{error, trace};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Golden ratio, base of the degree bound
const PHI: f64 = 1.618_033_988_749_895;

/// Handle to an element in a Fibonacci heap
///
/// Only the heap that issued it accepts it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FibonacciHandle {
    heap: HeapId,
    node: NodeKey,
}

impl Handle for FibonacciHandle {}

#[derive(Debug, Clone, Copy)]
struct Node<K> {
    key: K,
    vertex: Vertex,
    degree: usize,
    /// Lost a child since becoming a child
    marked: bool,
    parent: Option<NodeKey>,
    child: Option<NodeKey>,
    next: NodeKey,
    prev: NodeKey,
}

impl<K> ArenaNode for Node<K> {
    fn vertex(&self) -> Vertex {
        self.vertex
    }

    fn relink(&mut self, map: &FxHashMap<NodeKey, NodeKey>) {
        self.next = map[&self.next];
        self.prev = map[&self.prev];
        self.parent = self.parent.map(|k| map[&k]);
        self.child = self.child.map(|k| map[&k]);
    }
}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use apsp_heaps::fibonacci::FibonacciHeap;
/// use apsp_heaps::MergeableHeap;
///
/// let mut heap: FibonacciHeap<u32> = FibonacciHeap::with_capacity(4);
/// heap.insert(0, 9).unwrap();
/// let handle = heap.insert(1, 12).unwrap();
/// heap.decrease_key(&handle, 4).unwrap();
/// assert_eq!(heap.extract_min().unwrap(), Some((1, 4)));
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciHeap<K> {
    nodes: NodeArena<Node<K>>,
    resident: VertexIndex,
    min: Option<NodeKey>,
}

impl<K: Ord + Copy> MergeableHeap<K> for FibonacciHeap<K> {
    type Handle = FibonacciHandle;

    fn with_capacity(max_vertices: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(max_vertices),
            resident: VertexIndex::new(max_vertices),
            min: None,
        }
    }

    fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    fn len(&self) -> usize {
        self.resident.len()
    }

    /// Inserts a new element into the heap
    ///
    /// **Time Complexity**: O(1)
    fn insert(&mut self, vertex: Vertex, key: K) -> Result<Self::Handle, HeapError> {
        self.resident.check_vacant(vertex)?;
        let id = self.nodes.insert_with_key(|id| Node {
            key,
            vertex,
            degree: 0,
            marked: false,
            parent: None,
            child: None,
            next: id,
            prev: id,
        })?;
        self.resident.claim(vertex, id);
        self.add_root(id);
        Ok(self.handle(id))
    }

    fn find_min(&self) -> Option<(Vertex, K)> {
        self.min.map(|min| {
            let node = &self.nodes[min];
            (node.vertex, node.key)
        })
    }

    /// Removes and returns the minimum element
    ///
    /// **Time Complexity**: O(log n) amortized
    ///
    /// **Algorithm**:
    /// 1. Clear parent links and marks of the minimum's children and splice
    ///    them into the root ring
    /// 2. Unlink and free the minimum
    /// 3. Consolidate: link roots of equal degree until all degrees differ
    fn extract_min(&mut self) -> Result<Option<(Vertex, K)>, HeapError> {
        let Some(min) = self.min else {
            return Ok(None);
        };

        if let Some(first) = self.nodes[min].child.take() {
            for child in self.collect_ring(first) {
                let node = &mut self.nodes[child];
                node.parent = None;
                node.marked = false;
            }
            self.splice(min, first);
        }

        let rest = self.unlink(min);
        let node = self.nodes.remove(min).ok_or(HeapError::InvalidHandle)?;
        self.resident.release(node.vertex);

        self.min = match rest {
            Some(start) => self.consolidate(start)?,
            None => None,
        };

        Ok(Some((node.vertex, node.key)))
    }

    /// Decreases the key of an element
    ///
    /// **Time Complexity**: O(1) amortized
    ///
    /// **Algorithm**:
    /// 1. Lower the key
    /// 2. If the node is now smaller than its parent, cut it to the root ring
    /// 3. Cascading cut: walk up from the old parent, cutting marked ancestors
    ///    and marking the first unmarked one
    /// 4. Update the minimum
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError> {
        let id = self.resolve(handle).ok_or(HeapError::InvalidHandle)?;
        let node = &mut self.nodes[id];
        if new_key > node.key {
            return Err(HeapError::KeyIncreased);
        }
        node.key = new_key;

        if let Some(parent) = self.nodes[id].parent {
            if new_key < self.nodes[parent].key {
                self.cut(id, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(min) = self.min {
            if new_key < self.nodes[min].key {
                self.min = Some(id);
            }
        }

        Ok(())
    }

    /// Merges another heap into this heap
    ///
    /// **Time Complexity**: O(m) for m nodes in `other` to move them into this
    /// heap's arena; the ring concatenation itself is O(1)
    ///
    /// `other`'s handles are rejected afterwards.
    fn meld(&mut self, other: Self) -> Result<(), HeapError> {
        for vertex in other.resident.vertices() {
            self.resident.check_vacant(vertex)?;
        }

        let Some(other_min) = other.min else {
            return Ok(());
        };

        let remap = self.nodes.absorb(other.nodes)?;
        for &id in remap.values() {
            self.resident.claim(self.nodes[id].vertex(), id);
        }

        self.add_root(remap[&other_min]);
        Ok(())
    }

    fn key_of(&self, handle: &Self::Handle) -> Option<K> {
        self.resolve(handle).map(|id| self.nodes[id].key)
    }

    fn handle_of(&self, vertex: Vertex) -> Option<Self::Handle> {
        self.resident.get(vertex).map(|id| self.handle(id))
    }
}

impl<K: Ord + Copy> FibonacciHeap<K> {
    fn handle(&self, node: NodeKey) -> FibonacciHandle {
        FibonacciHandle {
            heap: self.nodes.id(),
            node,
        }
    }

    fn resolve(&self, handle: &FibonacciHandle) -> Option<NodeKey> {
        self.nodes.resolve(handle.heap, handle.node)
    }

    fn add_root(&mut self, id: NodeKey) {
        match self.min {
            None => self.min = Some(id),
            Some(min) => {
                self.splice(min, id);
                if self.nodes[id].key < self.nodes[min].key {
                    self.min = Some(id);
                }
            }
        }
    }

    /// Inserts the ring containing `b` right after `a`
    fn splice(&mut self, a: NodeKey, b: NodeKey) {
        let a_next = self.nodes[a].next;
        let b_prev = self.nodes[b].prev;
        self.nodes[a].next = b;
        self.nodes[b].prev = a;
        self.nodes[b_prev].next = a_next;
        self.nodes[a_next].prev = b_prev;
    }

    /// Removes `id` from its ring, returning another member if any remain
    fn unlink(&mut self, id: NodeKey) -> Option<NodeKey> {
        let next = self.nodes[id].next;
        if next == id {
            return None;
        }
        let prev = self.nodes[id].prev;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[id].next = id;
        self.nodes[id].prev = id;
        Some(next)
    }

    fn collect_ring(&self, start: NodeKey) -> SmallVec<[NodeKey; 16]> {
        let mut ring = SmallVec::new();
        let mut current = start;
        loop {
            ring.push(current);
            current = self.nodes[current].next;
            if current == start {
                break;
            }
        }
        ring
    }

    /// Links roots of equal degree until every degree is unique
    ///
    /// The table starts at ⌊log_φ capacity⌋ + 2 slots and grows if a larger
    /// degree ever shows up. Roots sharing a vertex are never linked; that
    /// means the residency index was bypassed and is logged as an error.
    fn consolidate(&mut self, start: NodeKey) -> Result<Option<NodeKey>, HeapError> {
        let roots = self.collect_ring(start);
        for &root in &roots {
            let node = &mut self.nodes[root];
            node.next = root;
            node.prev = root;
        }

        let mut table: SmallVec<[Option<NodeKey>; 16]> =
            SmallVec::from_elem(None, degree_bound(self.capacity()));
        let mut stranded: SmallVec<[NodeKey; 2]> = SmallVec::new();

        for root in roots {
            let mut tree = root;
            loop {
                let degree = self.nodes[tree].degree;
                if degree >= table.len() {
                    table.resize(degree + 1, None);
                }
                let Some(held) = table[degree] else {
                    table[degree] = Some(tree);
                    break;
                };
                if self.nodes[held].vertex == self.nodes[tree].vertex {
                    error!(
                        "fibonacci consolidation found vertex {} twice at degree {}; roots left unlinked",
                        self.nodes[tree].vertex, degree
                    );
                    stranded.push(held);
                    table[degree] = Some(tree);
                    break;
                }
                table[degree] = None;
                tree = self.link(held, tree)?;
            }
        }

        let mut min: Option<NodeKey> = None;
        for tree in table.into_iter().flatten().chain(stranded) {
            match min {
                None => min = Some(tree),
                Some(current) => {
                    self.splice(current, tree);
                    if self.nodes[tree].key < self.nodes[current].key {
                        min = Some(tree);
                    }
                }
            }
        }
        Ok(min)
    }

    /// Makes the larger of two detached roots of equal degree a child of the
    /// other; `held` wins ties
    fn link(&mut self, held: NodeKey, tree: NodeKey) -> Result<NodeKey, HeapError> {
        let (left, right) = (self.nodes[held].degree, self.nodes[tree].degree);
        if left != right {
            return Err(HeapError::DegreeMismatch { left, right });
        }

        let (winner, loser) = if self.nodes[tree].key < self.nodes[held].key {
            (tree, held)
        } else {
            (held, tree)
        };

        let node = &mut self.nodes[loser];
        node.parent = Some(winner);
        node.marked = false;
        match self.nodes[winner].child {
            Some(child) => self.splice(child, loser),
            None => self.nodes[winner].child = Some(loser),
        }
        self.nodes[winner].degree += 1;

        trace!(
            "linked vertex {} under vertex {}",
            self.nodes[loser].vertex,
            self.nodes[winner].vertex
        );
        Ok(winner)
    }

    /// Moves `id` from the child ring of `parent` to the root ring
    fn cut(&mut self, id: NodeKey, parent: NodeKey) {
        let rest = self.unlink(id);
        let parent_node = &mut self.nodes[parent];
        parent_node.degree -= 1;
        if parent_node.child == Some(id) {
            parent_node.child = rest;
        }

        let node = &mut self.nodes[id];
        node.parent = None;
        node.marked = false;
        if let Some(min) = self.min {
            self.splice(min, id);
        }

        trace!("cut vertex {} to the root ring", self.nodes[id].vertex);
    }

    /// Walks up from `id`: marked nodes are cut, the first unmarked non-root
    /// is marked and the walk stops
    fn cascading_cut(&mut self, mut id: NodeKey) {
        while let Some(parent) = self.nodes[id].parent {
            if !self.nodes[id].marked {
                self.nodes[id].marked = true;
                return;
            }
            self.cut(id, parent);
            id = parent;
        }
    }

    /// Number of roots in the root ring
    pub fn root_count(&self) -> usize {
        self.min.map_or(0, |min| self.collect_ring(min).len())
    }

    /// Checks every structural invariant of the heap
    ///
    /// - `next`/`prev` agree in every ring
    /// - parent links agree with ring membership and `degree` counts children
    /// - heap order holds along every edge
    /// - roots are unmarked and `min` has the minimum root key
    /// - every arena node is reachable and resident
    ///
    /// Intended for tests; O(n).
    pub fn verify_internal_structure(&self) -> bool {
        let Some(min) = self.min else {
            return self.nodes.len() == 0 && self.resident.len() == 0;
        };

        let roots = self.collect_ring(min);
        let min_key = self.nodes[min].key;
        if roots
            .iter()
            .any(|&r| self.nodes[r].marked || self.nodes[r].key < min_key)
        {
            return false;
        }

        let mut seen = 0usize;
        let mut stack: Vec<(NodeKey, Option<NodeKey>)> =
            roots.into_iter().map(|root| (root, None)).collect();

        while let Some((id, expected_parent)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                return false;
            };
            seen += 1;
            if node.parent != expected_parent
                || self.nodes[node.next].prev != id
                || self.resident.get(node.vertex) != Some(id)
            {
                return false;
            }

            let children = node.child.map(|c| self.collect_ring(c)).unwrap_or_default();
            if children.len() != node.degree {
                return false;
            }
            for child in children {
                if self.nodes[child].key < node.key {
                    return false;
                }
                stack.push((child, Some(id)));
            }
        }

        seen == self.nodes.len() && seen == self.resident.len()
    }
}

/// Size of the consolidation table: ⌊log_φ capacity⌋ + 2 slots
fn degree_bound(capacity: usize) -> usize {
    let n = capacity.max(1) as f64;
    (n.ln() / PHI.ln()).floor() as usize + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Eight nodes with keys 20..=90 merged into one B3 tree
    fn single_tree() -> (FibonacciHeap<u32>, Vec<FibonacciHandle>) {
        let mut heap = FibonacciHeap::with_capacity(16);
        let handles: Vec<_> = (0..9)
            .map(|v| heap.insert(v, 10 * (v as u32 + 1)).unwrap())
            .collect();
        assert_eq!(heap.extract_min(), Ok(Some((0, 10))));
        assert_eq!(heap.root_count(), 1);
        (heap, handles)
    }

    #[test]
    fn test_basic_operations() {
        let mut heap: FibonacciHeap<u32> = FibonacciHeap::with_capacity(8);
        assert_eq!(heap.find_min(), None);
        assert_eq!(heap.extract_min(), Ok(None));

        heap.insert(4, 5).unwrap();
        heap.insert(2, 3).unwrap();
        heap.insert(6, 7).unwrap();
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.find_min(), Some((2, 3)));

        assert_eq!(heap.extract_min(), Ok(Some((2, 3))));
        assert_eq!(heap.extract_min(), Ok(Some((4, 5))));
        assert_eq!(heap.extract_min(), Ok(Some((6, 7))));
        assert!(heap.is_empty());
        assert!(heap.verify_internal_structure());
    }

    #[test]
    fn test_first_cut_marks_parent() {
        let (mut heap, _) = single_tree();
        let root = heap.min.unwrap();
        let child = heap.nodes[root].child.unwrap();

        let leaf = heap
            .collect_ring(child)
            .into_iter()
            .find(|&c| heap.nodes[c].degree == 0)
            .unwrap();
        let handle = heap.handle(leaf);
        heap.decrease_key(&handle, 1).unwrap();

        // Parent is a root and stays unmarked
        assert!(!heap.nodes[root].marked);
        assert_eq!(heap.nodes[root].degree, 2);
        assert_eq!(heap.root_count(), 2);
        assert_eq!(heap.find_min().map(|(_, k)| k), Some(1));
        assert!(heap.verify_internal_structure());
    }

    #[test]
    fn test_cascading_cut() {
        let (mut heap, _) = single_tree();
        let root = heap.min.unwrap();
        let c2 = heap
            .collect_ring(heap.nodes[root].child.unwrap())
            .into_iter()
            .find(|&c| heap.nodes[c].degree == 2)
            .unwrap();
        let grandchildren = heap.collect_ring(heap.nodes[c2].child.unwrap());
        let leaf = *grandchildren
            .iter()
            .find(|&&c| heap.nodes[c].degree == 0)
            .unwrap();
        let inner = *grandchildren
            .iter()
            .find(|&&c| heap.nodes[c].degree == 1)
            .unwrap();

        let (leaf, inner) = (heap.handle(leaf), heap.handle(inner));
        heap.decrease_key(&leaf, 1).unwrap();
        assert!(heap.nodes[c2].marked);
        assert_eq!(heap.nodes[c2].parent, Some(root));

        heap.decrease_key(&inner, 2).unwrap();
        assert!(heap.nodes[c2].parent.is_none());
        assert!(!heap.nodes[c2].marked);
        assert!(!heap.nodes[root].marked);
        assert_eq!(heap.nodes[root].degree, 2);
        assert_eq!(heap.root_count(), 4);
        assert!(heap.verify_internal_structure());

        let mut keys = Vec::new();
        while let Some((_, key)) = heap.extract_min().unwrap() {
            keys.push(key);
            assert!(heap.verify_internal_structure());
        }
        assert_eq!(keys.len(), 8);
        assert_eq!(&keys[..2], &[1, 2]);
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    fn child_of_degree(heap: &FibonacciHeap<u32>, parent: NodeKey, degree: usize) -> NodeKey {
        heap.collect_ring(heap.nodes[parent].child.unwrap())
            .into_iter()
            .find(|&c| heap.nodes[c].degree == degree)
            .unwrap()
    }

    #[test]
    fn test_cascading_cut_through_marked_chain() {
        // 32 nodes consolidate into one B5
        let mut heap: FibonacciHeap<u32> = FibonacciHeap::with_capacity(64);
        for v in 0..33 {
            heap.insert(v, 10 * (v as u32 + 1)).unwrap();
        }
        heap.extract_min().unwrap();
        assert_eq!(heap.root_count(), 1);

        // root -> a -> b -> c -> e, each a non-root below the root
        let root = heap.min.unwrap();
        let a = child_of_degree(&heap, root, 4);
        let b = child_of_degree(&heap, a, 3);
        let c = child_of_degree(&heap, b, 2);
        let e = child_of_degree(&heap, c, 1);
        let b_leaf = child_of_degree(&heap, b, 0);
        let c_leaf = child_of_degree(&heap, c, 0);

        let handle = heap.handle(b_leaf);
        heap.decrease_key(&handle, 3).unwrap();
        let handle = heap.handle(c_leaf);
        heap.decrease_key(&handle, 2).unwrap();
        assert!(heap.nodes[b].marked && heap.nodes[c].marked);
        assert!(!heap.nodes[a].marked);
        assert_eq!(heap.root_count(), 3);

        // Cutting e cuts both marked ancestors and marks a
        let handle = heap.handle(e);
        heap.decrease_key(&handle, 1).unwrap();
        for cut in [e, c, b] {
            assert!(heap.nodes[cut].parent.is_none());
            assert!(!heap.nodes[cut].marked);
        }
        assert!(heap.nodes[a].marked);
        assert_eq!(heap.nodes[a].parent, Some(root));
        assert_eq!(heap.nodes[a].degree, 3);
        assert_eq!(heap.nodes[root].degree, 5);
        assert!(!heap.nodes[root].marked);
        assert_eq!(heap.root_count(), 6);
        assert_eq!(heap.find_min().map(|(_, k)| k), Some(1));
        assert!(heap.verify_internal_structure());

        let mut keys = Vec::new();
        while let Some((_, key)) = heap.extract_min().unwrap() {
            keys.push(key);
        }
        assert_eq!(keys.len(), 32);
        assert_eq!(&keys[..3], &[1, 2, 3]);
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_consolidate_never_links_same_vertex() {
        let mut heap: FibonacciHeap<u32> = FibonacciHeap::with_capacity(4);
        let first = heap.insert(0, 5).unwrap().node;
        let other = heap.insert(1, 4).unwrap().node;
        // Second node for vertex 0 that the residency index never sees
        let twin = heap
            .nodes
            .insert_with_key(|id| Node {
                key: 3,
                vertex: 0,
                degree: 0,
                marked: false,
                parent: None,
                child: None,
                next: id,
                prev: id,
            })
            .unwrap();
        heap.add_root(twin);

        heap.min = heap.consolidate(heap.min.unwrap()).unwrap();
        assert_eq!(heap.find_min(), Some((0, 3)));
        assert_eq!(heap.root_count(), 2);
        assert!(heap.nodes[twin].parent.is_none());
        assert_eq!(heap.nodes[twin].degree, 0);
        assert_eq!(heap.nodes[first].parent, Some(other));
        assert_eq!(heap.nodes[other].degree, 1);
    }

    #[test]
    fn test_decrease_key_without_violation_keeps_shape() {
        let (mut heap, handles) = single_tree();
        let root = heap.min.unwrap();
        let target = (1..9)
            .map(|v| handles[v])
            .find(|h| heap.nodes[h.node].parent == Some(root))
            .unwrap();
        let root_key = heap.nodes[root].key;

        heap.decrease_key(&target, root_key).unwrap();
        assert_eq!(heap.root_count(), 1);
        assert_eq!(heap.key_of(&target), Some(root_key));
        assert!(heap.verify_internal_structure());
    }

    #[test]
    fn test_decrease_key_rejects_bad_input() {
        let mut heap: FibonacciHeap<u32> = FibonacciHeap::with_capacity(4);
        let h = heap.insert(3, 10).unwrap();
        assert_eq!(heap.decrease_key(&h, 20), Err(HeapError::KeyIncreased));

        heap.extract_min().unwrap();
        assert_eq!(heap.decrease_key(&h, 1), Err(HeapError::InvalidHandle));
    }

    #[test]
    fn test_link_rejects_degree_mismatch() {
        let (mut heap, _) = single_tree();
        let root = heap.min.unwrap();
        heap.insert(12, 5).unwrap();
        let single = heap.handle_of(12).unwrap().node;
        heap.unlink(single);

        assert_eq!(
            heap.link(root, single),
            Err(HeapError::DegreeMismatch { left: 3, right: 0 })
        );
    }

    #[test]
    fn test_meld() {
        let mut left: FibonacciHeap<u32> = FibonacciHeap::with_capacity(8);
        let mut right: FibonacciHeap<u32> = FibonacciHeap::with_capacity(8);
        left.insert(0, 30).unwrap();
        left.insert(1, 10).unwrap();
        right.insert(2, 20).unwrap();
        right.insert(3, 5).unwrap();
        right.extract_min().unwrap();
        right.insert(4, 1).unwrap();

        left.meld(right).unwrap();
        assert_eq!(left.len(), 4);
        assert_eq!(left.find_min(), Some((4, 1)));
        assert!(left.verify_internal_structure());

        let order: Vec<_> = std::iter::from_fn(|| left.extract_min().unwrap())
            .map(|(v, _)| v)
            .collect();
        assert_eq!(order, vec![4, 1, 2, 0]);
    }

    #[test]
    fn test_meld_rejects_shared_vertex_and_accepts_empty() {
        let mut left: FibonacciHeap<u32> = FibonacciHeap::with_capacity(2);
        let mut right: FibonacciHeap<u32> = FibonacciHeap::with_capacity(2);
        left.insert(0, 1).unwrap();
        left.insert(1, 1).unwrap();
        right.insert(0, 1).unwrap();
        assert_eq!(left.meld(right), Err(HeapError::DuplicateVertex(0)));

        let mut left: FibonacciHeap<u32> = FibonacciHeap::with_capacity(2);
        let empty: FibonacciHeap<u32> = FibonacciHeap::with_capacity(2);
        left.insert(1, 1).unwrap();
        assert_eq!(left.meld(empty), Ok(()));
        assert_eq!(left.len(), 1);
    }

    #[test]
    fn test_degree_bound() {
        assert_eq!(degree_bound(1), 2);
        assert_eq!(degree_bound(8), 6);
        assert_eq!(degree_bound(500), 14);
    }
}
