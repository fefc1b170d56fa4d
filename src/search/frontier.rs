use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::SearchNode;

/// Heap entry wrapping a node. [BinaryHeap] is a max-heap, so the ordering is inverted on the
/// estimated cost.
struct SmallestCostHolder {
    node: SearchNode,
    seq: u64,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the node with the largest cost so far
        // (the one closest to the goal), then the earliest insertion.
        other
            .node
            .f()
            .cmp(&self.node.f())
            .then_with(|| self.node.g().cmp(&other.node.g()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Open set of the search. Several entries for the same cell may coexist; the cost map decides
/// which of them is current.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<SmallestCostHolder>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }
    pub fn with_capacity(capacity: usize) -> Frontier {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }
    pub fn insert(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(SmallestCostHolder { node, seq });
    }
    /// Removes the node with the smallest f, or [None] if the frontier is empty.
    pub fn extract_min(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|holder| holder.node)
    }
    pub fn peek_min(&self) -> Option<&SearchNode> {
        self.heap.peek().map(|holder| &holder.node)
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Cell, node::Orientation};

    fn node(row: i32, g: u32, h: u32) -> SearchNode {
        SearchNode::new(Cell::new(row, 0), Orientation::North, g, h, None)
    }

    #[test]
    fn extracts_in_f_order() {
        let mut frontier = Frontier::new();
        for (row, g, h) in [(0, 5, 5), (1, 1, 2), (2, 0, 7), (3, 2, 2)] {
            frontier.insert(node(row, g, h));
        }
        let order: Vec<u32> = std::iter::from_fn(|| frontier.extract_min())
            .map(|n| n.f())
            .collect();
        assert_eq!(order, vec![3, 4, 7, 10]);
        assert!(frontier.is_empty());
        assert!(frontier.extract_min().is_none());
    }

    #[test]
    fn ties_prefer_deeper_then_older_nodes() {
        let mut frontier = Frontier::new();
        frontier.insert(node(0, 1, 3));
        frontier.insert(node(1, 3, 1));
        frontier.insert(node(2, 1, 3));
        frontier.insert(node(3, 3, 1));
        let rows: Vec<i32> = std::iter::from_fn(|| frontier.extract_min())
            .map(|n| n.row())
            .collect();
        assert_eq!(rows, vec![1, 3, 0, 2]);
    }

    #[test]
    fn keeps_duplicate_cells() {
        let mut frontier = Frontier::with_capacity(4);
        frontier.insert(node(0, 4, 0));
        frontier.insert(node(0, 2, 0));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.peek_min().map(|n| n.g()), Some(2));
        assert_eq!(frontier.extract_min().map(|n| n.g()), Some(2));
        assert_eq!(frontier.extract_min().map(|n| n.g()), Some(4));
    }
}
