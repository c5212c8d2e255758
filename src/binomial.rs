//! Binomial Heap implementation
//!
//! A binomial heap is a collection of binomial trees with:
//! - O(1) insert (lazy: roots are only spliced into the root ring)
//! - O(m) meld, dominated by moving the other heap's m nodes into this arena
//! - O(log n) amortized extract_min
//! - O(log n) decrease_key
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and its root has children B_{k-1}, ..., B₀
//!
//! Roots live in a singly linked circular ring and the heap keeps a key to the
//! minimum root. Children of a node form their own ring, reachable through the
//! node's `child` key.
//!
//! **Key Operations**:
//! - **Insert**: splice a B₀ next to the minimum root
//! - **Meld**: splice two root rings together
//! - **Extract-min**: remove the minimum root, splice its children into the root
//!   ring, then consolidate so that no two roots share a degree
//! - **Decrease-key**: lower the key and swap the node with its parent until heap
//!   order holds; the node moves, its handle stays valid
//!
//! **Invariant**: right after extract_min every root has a distinct degree, so
//! there are O(log n) roots. Between extractions, inserts and melds may leave
//! several roots of the same degree.

use crate::storage::{ArenaNode, HeapId, NodeArena, NodeKey, VertexIndex};
use crate::traits::{Handle, HeapError, MergeableHeap, Vertex};
use log::{error, trace};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Handle to an element in a Binomial heap
///
/// Carries the identity of the issuing heap, so it is rejected by any other
/// heap, including one that absorbed the issuer through a meld.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BinomialHandle {
    heap: HeapId,
    node: NodeKey,
}

impl Handle for BinomialHandle {}

/// Internal node structure for binomial heap
///
/// - `parent`: key of the parent (None if root)
/// - `child`: key of one child; the others are reached through its sibling ring
/// - `next`: next sibling in a singly linked circular ring (itself if alone)
/// - `degree`: number of children
#[derive(Debug, Clone, Copy)]
struct Node<K> {
    key: K,
    vertex: Vertex,
    degree: usize,
    parent: Option<NodeKey>,
    child: Option<NodeKey>,
    next: NodeKey,
}

impl<K> ArenaNode for Node<K> {
    fn vertex(&self) -> Vertex {
        self.vertex
    }

    fn relink(&mut self, map: &FxHashMap<NodeKey, NodeKey>) {
        self.next = map[&self.next];
        self.parent = self.parent.map(|k| map[&k]);
        self.child = self.child.map(|k| map[&k]);
    }
}

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use apsp_heaps::binomial::BinomialHeap;
/// use apsp_heaps::MergeableHeap;
///
/// let mut heap: BinomialHeap<u32> = BinomialHeap::with_capacity(4);
/// let handle = heap.insert(0, 5).unwrap();
/// heap.insert(1, 3).unwrap();
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.find_min(), Some((0, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct BinomialHeap<K> {
    nodes: NodeArena<Node<K>>,
    resident: VertexIndex,
    /// Minimum root, entry point of the root ring
    min: Option<NodeKey>,
}

impl<K: Ord + Copy> MergeableHeap<K> for BinomialHeap<K> {
    type Handle = BinomialHandle;

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
    ///
    /// The new B₀ tree is spliced into the root ring next to the minimum. No
    /// linking happens here; same-degree roots are merged by the next
    /// extract_min.
    fn insert(&mut self, vertex: Vertex, key: K) -> Result<Self::Handle, HeapError> {
        self.resident.check_vacant(vertex)?;
        let id = self.nodes.insert_with_key(|id| Node {
            key,
            vertex,
            degree: 0,
            parent: None,
            child: None,
            next: id,
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
    /// **Time Complexity**: O(log n) amortized, O(n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Unlink the minimum root from the root ring
    /// 2. Clear the parent links of its children and splice their ring into
    ///    the root ring
    /// 3. Free the node
    /// 4. Consolidate: link roots of equal degree until all degrees differ
    /// 5. Scan the surviving roots for the new minimum
    fn extract_min(&mut self) -> Result<Option<(Vertex, K)>, HeapError> {
        let Some(min) = self.min else {
            return Ok(None);
        };

        let rest = self.unlink_root(min);
        let children = self.nodes[min].child.take();
        if let Some(first) = children {
            for child in self.collect_ring(first) {
                self.nodes[child].parent = None;
            }
        }

        let start = match (rest, children) {
            (Some(root), Some(first)) => {
                self.splice(root, first);
                Some(root)
            }
            (root, first) => root.or(first),
        };

        let node = self.nodes.remove(min).ok_or(HeapError::InvalidHandle)?;
        self.resident.release(node.vertex);

        self.min = match start {
            Some(start) => self.consolidate(start)?,
            None => None,
        };

        Ok(Some((node.vertex, node.key)))
    }

    /// Decreases the key of an element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// A binomial tree cannot lose a subtree without losing its shape, so the
    /// node is never cut. Instead it trades places with its parent, one level
    /// at a time, until the parent key is no larger. Nodes are swapped, not
    /// payloads, so every outstanding handle keeps naming its own vertex.
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError> {
        let id = self.resolve(handle).ok_or(HeapError::InvalidHandle)?;
        let node = &mut self.nodes[id];
        if new_key > node.key {
            return Err(HeapError::KeyIncreased);
        }
        node.key = new_key;

        while let Some(parent) = self.nodes[id].parent {
            if self.nodes[parent].key <= new_key {
                break;
            }
            self.swap_with_parent(id, parent);
        }

        if self.nodes[id].parent.is_none() {
            if let Some(min) = self.min {
                if new_key < self.nodes[min].key {
                    self.min = Some(id);
                }
            }
        }

        Ok(())
    }

    /// Merges another heap into this heap
    ///
    /// **Time Complexity**: O(m) for m nodes in `other`: they are moved into
    /// this heap's arena, then the root rings are spliced in O(1).
    ///
    /// The unique-degree invariant is not restored here; the next extract_min
    /// does it. Handles issued by `other` are rejected afterwards; use
    /// [`MergeableHeap::handle_of`] to get fresh ones.
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

impl<K: Ord + Copy> BinomialHeap<K> {
    fn handle(&self, node: NodeKey) -> BinomialHandle {
        BinomialHandle {
            heap: self.nodes.id(),
            node,
        }
    }

    fn resolve(&self, handle: &BinomialHandle) -> Option<NodeKey> {
        self.nodes.resolve(handle.heap, handle.node)
    }

    /// Splices the root ring that `id` belongs to next to the minimum root
    /// and updates the minimum
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

    /// Joins the two distinct rings containing `a` and `b`
    fn splice(&mut self, a: NodeKey, b: NodeKey) {
        let a_next = self.nodes[a].next;
        self.nodes[a].next = self.nodes[b].next;
        self.nodes[b].next = a_next;
    }

    /// Node whose `next` is `id` (id itself when alone)
    fn ring_prev(&self, id: NodeKey) -> NodeKey {
        let mut current = id;
        while self.nodes[current].next != id {
            current = self.nodes[current].next;
        }
        current
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

    /// Removes `id` from its ring, returning another member if any remain
    fn unlink_root(&mut self, id: NodeKey) -> Option<NodeKey> {
        let next = self.nodes[id].next;
        if next == id {
            return None;
        }
        let prev = self.ring_prev(id);
        self.nodes[prev].next = next;
        self.nodes[id].next = id;
        Some(next)
    }

    /// Links roots of equal degree until every degree is unique
    ///
    /// Each root is visited once. A degree-indexed table holds the one tree seen
    /// so far at each degree; a collision links the pair and retries at the
    /// next degree, like carry propagation in binary addition. The root ring is
    /// rebuilt from the table and the new minimum is found on the way.
    ///
    /// Two roots carrying the same vertex are left uncombined. That can only
    /// happen if the residency index was bypassed, so it is logged as an error.
    fn consolidate(&mut self, start: NodeKey) -> Result<Option<NodeKey>, HeapError> {
        let roots = self.collect_ring(start);
        for &root in &roots {
            self.nodes[root].next = root;
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
                        "binomial consolidation found vertex {} twice at degree {}; roots left uncombined",
                        self.nodes[tree].vertex, degree
                    );
                    stranded.push(held);
                    table[degree] = Some(tree);
                    break;
                }
                table[degree] = None;
                tree = self.combine(held, tree)?;
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

    /// Links two detached trees of the same degree into one of degree + 1
    ///
    /// The root with the smaller key becomes the parent; on a tie `held` wins.
    /// The loser joins the winner's child ring.
    fn combine(&mut self, held: NodeKey, tree: NodeKey) -> Result<NodeKey, HeapError> {
        let (left, right) = (self.nodes[held].degree, self.nodes[tree].degree);
        if left != right {
            return Err(HeapError::DegreeMismatch { left, right });
        }

        let (winner, loser) = if self.nodes[tree].key < self.nodes[held].key {
            (tree, held)
        } else {
            (held, tree)
        };

        self.nodes[loser].parent = Some(winner);
        match self.nodes[winner].child {
            Some(child) => self.splice(child, loser),
            None => self.nodes[winner].child = Some(loser),
        }
        self.nodes[winner].degree += 1;

        trace!(
            "combined vertex {} under vertex {} (degree {})",
            self.nodes[loser].vertex,
            self.nodes[winner].vertex,
            self.nodes[winner].degree
        );
        Ok(winner)
    }

    /// Exchanges the tree positions of `node` and its parent `parent`
    ///
    /// `node` takes over the parent's place in its sibling ring, its parent
    /// link, its degree and its children (with `parent` standing where `node`
    /// was). `parent` takes over `node`'s old place and children. Tree shapes
    /// are unchanged; only which node sits where.
    fn swap_with_parent(&mut self, node: NodeKey, parent: NodeKey) {
        let grandparent = self.nodes[parent].parent;
        let parent_prev = self.ring_prev(parent);
        let parent_next = self.nodes[parent].next;
        let node_prev = self.ring_prev(node);
        let node_next = self.nodes[node].next;
        let node_child = self.nodes[node].child;
        let parent_child = self.nodes[parent]
            .child
            .filter(|&c| c != node)
            .unwrap_or(parent);

        if let Some(first) = node_child {
            for child in self.collect_ring(first) {
                self.nodes[child].parent = Some(parent);
            }
        }
        for sibling in self.collect_ring(node) {
            if sibling != node {
                self.nodes[sibling].parent = Some(node);
            }
        }

        // node replaces parent in the parent's ring
        if parent_next == parent {
            self.nodes[node].next = node;
        } else {
            self.nodes[parent_prev].next = node;
            self.nodes[node].next = parent_next;
        }

        // parent replaces node among the old siblings
        if node_next == node {
            self.nodes[parent].next = parent;
        } else {
            self.nodes[node_prev].next = parent;
            self.nodes[parent].next = node_next;
        }

        self.nodes[node].parent = grandparent;
        self.nodes[node].child = Some(parent_child);
        self.nodes[parent].parent = Some(node);
        self.nodes[parent].child = node_child;

        if let Some(grandparent) = grandparent {
            if self.nodes[grandparent].child == Some(parent) {
                self.nodes[grandparent].child = Some(node);
            }
        }
        if self.min == Some(parent) {
            self.min = Some(node);
        }

        let parent_degree = self.nodes[parent].degree;
        self.nodes[parent].degree = self.nodes[node].degree;
        self.nodes[node].degree = parent_degree;

        trace!(
            "swapped vertex {} above vertex {}",
            self.nodes[node].vertex,
            self.nodes[parent].vertex
        );
    }

    /// Number of roots in the root ring
    pub fn root_count(&self) -> usize {
        self.min.map_or(0, |min| self.collect_ring(min).len())
    }

    /// Checks every structural invariant of the heap
    ///
    /// - rings are closed and parent links agree with ring membership
    /// - `degree` equals the number of children
    /// - children of a degree-d node have degrees d-1, ..., 0 (binomial shape)
    /// - heap order holds along every edge
    /// - `min` is a root with the minimum key
    /// - every arena node is reachable and resident
    ///
    /// Intended for tests; O(n).
    pub fn verify_internal_structure(&self) -> bool {
        let Some(min) = self.min else {
            return self.nodes.len() == 0 && self.resident.len() == 0;
        };

        let mut seen = 0usize;
        let mut stack: Vec<(NodeKey, Option<NodeKey>)> = self
            .collect_ring(min)
            .into_iter()
            .map(|root| (root, None))
            .collect();

        let min_key = self.nodes[min].key;
        for &(root, _) in &stack {
            if self.nodes[root].key < min_key {
                return false;
            }
        }

        while let Some((id, expected_parent)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                return false;
            };
            seen += 1;
            if node.parent != expected_parent || self.resident.get(node.vertex) != Some(id) {
                return false;
            }

            let children = node.child.map(|c| self.collect_ring(c)).unwrap_or_default();
            if children.len() != node.degree {
                return false;
            }
            let mut degrees: SmallVec<[usize; 16]> = SmallVec::new();
            for &child in &children {
                let child_node = &self.nodes[child];
                if child_node.key < node.key {
                    return false;
                }
                degrees.push(child_node.degree);
                stack.push((child, Some(id)));
            }
            degrees.sort_unstable();
            if degrees.iter().enumerate().any(|(i, &d)| i != d) {
                return false;
            }
        }

        seen == self.nodes.len() && seen == self.resident.len()
    }
}

/// Size of the consolidation table: ⌊log₂ capacity⌋ + 2 slots
fn degree_bound(capacity: usize) -> usize {
    let bits = usize::BITS - capacity.max(1).leading_zeros();
    bits as usize + 1
}
