//! Id-indexed storage for every chokepoint of a map
//!
//! Real nodes occupy the dense range `[0, real_count)`, which may contain
//! vacant slots. Boundary nodes follow contiguously and are never vacant.

use serde::Serialize;

use crate::chokepoint::node::{ChokePoint, NodeKind};
use crate::core::error::{ChokeError, Result};
use crate::core::types::{NodeId, OctetPos};

/// One arena entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Slot {
    Vacant,
    Occupied(ChokePoint),
}

impl Slot {
    pub fn node(&self) -> Option<&ChokePoint> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant => None,
        }
    }

    pub fn node_mut(&mut self) -> Option<&mut ChokePoint> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant => None,
        }
    }
}

/// Which part of the id space an operation covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeSet {
    Real,
    Boundary,
    All,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NodeArena {
    slots: Vec<Slot>,
    real_count: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the arena from imported real nodes
    ///
    /// The real range ends after the highest id; ids not supplied become
    /// vacant slots. Supplied kinds are forced to `Real`.
    pub fn from_real(nodes: impl IntoIterator<Item = ChokePoint>) -> Result<Self> {
        let mut slots: Vec<Slot> = Vec::new();
        for mut node in nodes {
            let idx = node.id.index();
            if idx >= slots.len() {
                slots.resize(idx + 1, Slot::Vacant);
            }
            if matches!(slots[idx], Slot::Occupied(_)) {
                return Err(ChokeError::DuplicateNode(node.id));
            }
            node.kind = NodeKind::Real;
            slots[idx] = Slot::Occupied(node);
        }

        let real_count = slots.len();
        Ok(Self { slots, real_count })
    }

    /// Number of ids in the real range, vacant slots included
    pub fn real_count(&self) -> usize {
        self.real_count
    }

    pub fn boundary_count(&self) -> usize {
        self.slots.len() - self.real_count
    }

    /// Total size of the id space
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&ChokePoint> {
        self.slots.get(id.index()).and_then(Slot::node)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ChokePoint> {
        self.slots.get_mut(id.index()).and_then(Slot::node_mut)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn range(&self, set: NodeSet) -> std::ops::Range<usize> {
        match set {
            NodeSet::Real => 0..self.real_count,
            NodeSet::Boundary => self.real_count..self.slots.len(),
            NodeSet::All => 0..self.slots.len(),
        }
    }

    /// Occupied nodes of `set` in ascending id order
    pub fn iter(&self, set: NodeSet) -> impl Iterator<Item = &ChokePoint> {
        self.slots[self.range(set)].iter().filter_map(Slot::node)
    }

    pub fn iter_mut(&mut self, set: NodeSet) -> impl Iterator<Item = &mut ChokePoint> {
        let range = self.range(set);
        self.slots[range].iter_mut().filter_map(Slot::node_mut)
    }

    /// Occupied ids of `set` in ascending order
    pub fn ids(&self, set: NodeSet) -> Vec<NodeId> {
        self.iter(set).map(|node| node.id).collect()
    }

    /// Append a boundary node with the next free id
    pub fn push_boundary(&mut self, name: impl Into<String>, pos: OctetPos) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots
            .push(Slot::Occupied(ChokePoint::boundary(id, name, pos)));
        id
    }

    /// Discard all boundary nodes, leaving the real range untouched
    pub fn clear_boundary(&mut self) {
        self.slots.truncate(self.real_count);
    }

    /// Full reset: drop boundary nodes and every derived field
    pub fn reset(&mut self) {
        self.clear_boundary();
        for node in self.iter_mut(NodeSet::Real) {
            node.clear_derived();
        }
    }
}
