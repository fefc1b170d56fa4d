use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::grid::Cell;
use crate::node::SearchNode;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Best known node per cell, kept in discovery order. Every node carries the cell it was
/// reached from, so the map also serves as the came-from relation of the search.
#[derive(Clone, Debug, Default)]
pub struct CostMap {
    nodes: FxIndexMap<Cell, SearchNode>,
}

impl CostMap {
    pub fn new() -> CostMap {
        CostMap::default()
    }
    pub fn with_capacity(capacity: usize) -> CostMap {
        CostMap {
            nodes: FxIndexMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
        }
    }
    pub fn get(&self, cell: &Cell) -> Option<&SearchNode> {
        self.nodes.get(cell)
    }
    /// Stores `node` under its cell, replacing any previous entry. Callers only do this when the
    /// node improves on what is stored.
    pub fn put(&mut self, node: SearchNode) {
        self.nodes.insert(node.key(), node);
    }
    /// True if `g` is strictly cheaper than the stored cost for `cell`, or nothing is stored.
    pub fn improves(&self, cell: &Cell, g: u32) -> bool {
        self.get(cell).map_or(true, |best| g < best.g())
    }
    pub fn contains(&self, cell: &Cell) -> bool {
        self.nodes.contains_key(cell)
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Nodes in the order their cells were first discovered.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.values()
    }

    /// Follows predecessors from `cell` back to the root and returns the cells from root to
    /// `cell`. Empty if `cell` was never reached.
    pub fn path_to(&self, cell: &Cell) -> Vec<Cell> {
        let mut path: Vec<Cell> = std::iter::successors(self.get(cell), |node| {
            node.predecessor().and_then(|p| self.get(&p))
        })
        .map(|node| node.cell())
        .take(self.len())
        .collect();
        path.reverse();
        path
    }
}
