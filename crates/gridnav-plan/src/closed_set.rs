//! Arena-backed closed set keyed by linear cell index.

use crate::node::Node;

/// Settled nodes of one search, stored in a flat `Vec` sized to the grid.
///
/// Membership checks and parent lookups are O(1) slot reads. A cell is
/// settled at most once per search; later inserts for the same slot are
/// ignored so the first (cheapest) settlement keeps its parent link.
#[derive(Debug)]
pub(crate) struct ClosedSet {
    slots: Vec<Option<Node>>,
    len: usize,
}

impl ClosedSet {
    /// Empty set with one slot per grid cell.
    pub(crate) fn new(cells: usize) -> Self {
        Self {
            slots: vec![None; cells],
            len: 0,
        }
    }

    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.slots[idx].is_some()
    }

    pub(crate) fn get(&self, idx: usize) -> Option<Node> {
        self.slots[idx]
    }

    pub(crate) fn insert(&mut self, node: Node) {
        let slot = &mut self.slots[node.idx];
        if slot.is_none() {
            *slot = Some(node);
            self.len += 1;
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
