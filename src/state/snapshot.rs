//! Load a polled game-world snapshot from JSON
//!
//! A snapshot carries everything the import side hands to the engine: node
//! records, hull chains and front-line ids, altitudes, recent events, map
//! cells and firebase pairs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activity::GameEvent;
use crate::chokepoint::{ChokePoint, NodeArena};
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::{Altitude, FacilityId, FactionId, NodeId, OctetPos};
use crate::firebase::{Firebase, LinkState};
use crate::spatial::MapCell;
use crate::state::sources::{StaticOutline, StaticTerrain};
use crate::state::GameState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub owner: Option<FactionId>,
    pub pos: OctetPos,
    #[serde(default)]
    pub links: Vec<NodeId>,
}

impl From<NodeRecord> for ChokePoint {
    fn from(record: NodeRecord) -> Self {
        let mut node = ChokePoint::new(record.id, record.name, record.pos).with_links(record.links);
        node.owner = record.owner;
        node
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseSideRecord {
    pub facility: FacilityId,
    pub chokepoint: NodeId,
    #[serde(default)]
    pub owner: Option<FactionId>,
    #[serde(default)]
    pub is_open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebasePairRecord {
    #[serde(default)]
    pub link: LinkState,
    pub sides: [FirebaseSideRecord; 2],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub nodes: Vec<NodeRecord>,
    pub hulls: Vec<Vec<NodeId>>,
    pub frontline: Vec<NodeId>,
    pub altitudes: Vec<Altitude>,
    pub events: Vec<GameEvent>,
    pub cells: Vec<MapCell>,
    pub firebases: Vec<FirebasePairRecord>,
}

impl Snapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Split into the engine context and its static collaborators
    pub fn into_state(self, config: &EngineConfig) -> Result<(GameState, StaticOutline, StaticTerrain)> {
        let nodes = NodeArena::from_real(self.nodes.into_iter().map(ChokePoint::from))?;

        let mut state = GameState::new(config).with_nodes(nodes);
        state.events.extend(self.events);
        state.cells.rebuild(self.cells);

        for pair in self.firebases {
            let [a, b] = pair.sides;
            state.firebases.set_link(a.facility, b.facility, pair.link);
            for (side, partner) in [(&a, b.facility), (&b, a.facility)] {
                state.firebases.insert(Firebase {
                    facility: side.facility,
                    partner,
                    chokepoint: side.chokepoint,
                    owner: side.owner,
                    is_open: side.is_open,
                });
            }
        }

        tracing::debug!(
            real_nodes = state.nodes.real_count(),
            events = state.events.len(),
            cells = state.cells.len(),
            firebases = state.firebases.len(),
            "snapshot imported"
        );

        Ok((
            state,
            StaticOutline::new(self.hulls, self.frontline),
            StaticTerrain::new(self.altitudes),
        ))
    }
}
