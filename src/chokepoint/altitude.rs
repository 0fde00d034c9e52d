//! Terrain altitude for real chokepoints

use crate::chokepoint::arena::{NodeArena, NodeSet};
use crate::core::types::{Altitude, NodeId};

/// Altitude value meaning "no terrain data"
pub const NO_DATA: Altitude = 0;

pub struct AltitudeEnricher;

impl AltitudeEnricher {
    /// Reset every real altitude, then apply `values` indexed by node id
    ///
    /// Missing entries and `NO_DATA` leave the altitude unset. Returns how
    /// many nodes received an altitude.
    pub fn apply(arena: &mut NodeArena, values: &[Altitude]) -> usize {
        for node in arena.iter_mut(NodeSet::Real) {
            node.altitude = None;
        }

        let mut applied = 0;
        for (idx, &value) in values.iter().enumerate().take(arena.real_count()) {
            if value == NO_DATA {
                continue;
            }
            if let Some(node) = arena.get_mut(NodeId(idx as u32)) {
                node.altitude = Some(value);
                applied += 1;
            }
        }
        applied
    }
}
