//! Firebase pairs - linked forward spawn structures on facilities
//!
//! Two facilities joined by a link each host one firebase side. While the
//! link is active exactly one side is open; an inactive link closes both.

pub mod resolver;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::{FacilityId, FactionId, NodeId};

pub use resolver::{FirebasePairResolver, FirebaseResolution, FirebaseViolation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkState {
    #[default]
    Inactive,
    Normal,
    /// Both ends held by brigades in contact
    BrigadeContested,
}

impl LinkState {
    pub fn is_active(self) -> bool {
        self != LinkState::Inactive
    }
}

/// One side of a firebase pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firebase {
    pub facility: FacilityId,
    pub partner: FacilityId,
    /// Chokepoint the hosting facility belongs to
    pub chokepoint: NodeId,
    pub owner: Option<FactionId>,
    #[serde(default)]
    pub is_open: bool,
}

/// All firebase sides plus the state of each pair's link
#[derive(Debug, Clone, Default)]
pub struct FirebaseRegistry {
    sides: BTreeMap<FacilityId, Firebase>,
    links: BTreeMap<(FacilityId, FacilityId), LinkState>,
}

fn link_key(a: FacilityId, b: FacilityId) -> (FacilityId, FacilityId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl FirebaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a side; its `partner` must be registered too before resolving
    pub fn insert(&mut self, side: Firebase) {
        self.sides.insert(side.facility, side);
    }

    pub fn set_link(&mut self, a: FacilityId, b: FacilityId, state: LinkState) {
        self.links.insert(link_key(a, b), state);
    }

    /// State of the link between `a` and `b`; unknown links are inactive
    pub fn link(&self, a: FacilityId, b: FacilityId) -> LinkState {
        self.links.get(&link_key(a, b)).copied().unwrap_or_default()
    }

    pub fn get(&self, facility: FacilityId) -> Option<&Firebase> {
        self.sides.get(&facility)
    }

    pub fn get_mut(&mut self, facility: FacilityId) -> Option<&mut Firebase> {
        self.sides.get_mut(&facility)
    }

    /// Sides in ascending facility order
    pub fn iter(&self) -> impl Iterator<Item = &Firebase> {
        self.sides.values()
    }

    pub fn facilities(&self) -> Vec<FacilityId> {
        self.sides.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    pub fn clear(&mut self) {
        self.sides.clear();
        self.links.clear();
    }
}
