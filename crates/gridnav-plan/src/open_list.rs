//! Min-ordered open list over a max-heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::Node;

/// Heap entry carrying an insertion sequence number for tie-breaking.
#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    node: Node,
    seq: u64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest f first.
        // Ties fall back to smaller h, then earlier insertion, which keeps
        // pop order fully deterministic.
        other
            .node
            .f()
            .total_cmp(&self.node.f())
            .then_with(|| other.node.h.total_cmp(&self.node.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Priority queue of frontier nodes, cheapest `f` first.
///
/// Duplicate entries for the same cell are allowed; the planner discards
/// stale ones at pop time by consulting its closed set.
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<HeapEntry>,
    seq: u64,
}

impl OpenList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: Node) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(HeapEntry { node, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|e| e.node)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
