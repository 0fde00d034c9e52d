//! Game-state context: every collection a refresh cycle reads or rebuilds
//!
//! The caller owns one `GameState` and must not let anything else mutate it
//! while a refresh runs; readers should work from a finished snapshot.

pub mod refresh;
pub mod snapshot;
pub mod sources;

use crate::activity::EventLog;
use crate::chokepoint::NodeArena;
use crate::core::config::EngineConfig;
use crate::firebase::FirebaseRegistry;
use crate::spatial::DeathGrid;

pub use refresh::RefreshReport;
pub use snapshot::Snapshot;
pub use sources::{OutlineSource, StaticOutline, StaticTerrain, TerrainSource};

#[derive(Debug, Clone)]
pub struct GameState {
    pub nodes: NodeArena,
    pub events: EventLog,
    pub cells: DeathGrid,
    pub firebases: FirebaseRegistry,
    generation: u64,
}

impl GameState {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            nodes: NodeArena::new(),
            events: EventLog::new(),
            cells: DeathGrid::new(config.cell_size, config.cell_influence_radius),
            firebases: FirebaseRegistry::new(),
            generation: 0,
        }
    }

    pub fn with_nodes(mut self, nodes: NodeArena) -> Self {
        self.nodes = nodes;
        self
    }

    /// Number of completed refresh cycles
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clear every derived collection; imported data is kept
    pub fn reset(&mut self) {
        self.nodes.reset();
    }
}
