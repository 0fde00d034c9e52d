//! ChokePoint - a node of the battle map graph
//!
//! Real chokepoints come from the game's import data. Boundary chokepoints are
//! synthesized just outside the outer hull so the front line has endpoints
//! beyond the playable graph.

use serde::{Deserialize, Serialize};

use crate::activity::ActivityLevel;
use crate::core::types::{Altitude, FactionId, NodeId, OctetPos};

/// Origin of a chokepoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Defined by the game
    Real,
    /// Synthesized ring node outside the hull ("dummy")
    Boundary,
}

/// A chokepoint on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChokePoint {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub owner: Option<FactionId>,
    pub pos: OctetPos,
    /// Authored connections, fixed at import
    pub explicit_links: Vec<NodeId>,

    // Derived on every refresh
    pub altitude: Option<Altitude>,
    pub activity: ActivityLevel,
    pub nearby: Vec<NodeId>,
}

impl ChokePoint {
    pub fn new(id: NodeId, name: impl Into<String>, pos: OctetPos) -> Self {
        Self {
            id,
            name: name.into(),
            kind: NodeKind::Real,
            owner: None,
            pos,
            explicit_links: Vec::new(),
            altitude: None,
            activity: ActivityLevel::None,
            nearby: Vec::new(),
        }
    }

    /// A synthesized boundary node: neutral and unlinked
    pub fn boundary(id: NodeId, name: impl Into<String>, pos: OctetPos) -> Self {
        Self {
            kind: NodeKind::Boundary,
            ..Self::new(id, name, pos)
        }
    }

    pub fn with_owner(mut self, owner: FactionId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_links(mut self, links: impl IntoIterator<Item = NodeId>) -> Self {
        self.explicit_links = links.into_iter().collect();
        self
    }

    pub fn is_boundary(&self) -> bool {
        self.kind == NodeKind::Boundary
    }

    pub fn is_linked_to(&self, other: NodeId) -> bool {
        self.explicit_links.contains(&other)
    }

    /// Drop every derived field
    pub fn clear_derived(&mut self) {
        self.altitude = None;
        self.activity = ActivityLevel::None;
        self.nearby.clear();
    }
}
