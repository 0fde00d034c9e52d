//! One refresh cycle over a `GameState`
//!
//! Order matters: the boundary ring needs the hulls of the real set, the
//! proximity passes need the ring, and activity needs the final graph.

use serde::Serialize;

use crate::activity::{ActivityClassifier, ActivityScore};
use crate::chokepoint::{
    AltitudeEnricher, BoundaryNodeSynthesizer, BuildStats, ProximityGraphBuilder,
};
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::Timestamp;
use crate::firebase::{FirebasePairResolver, FirebaseResolution};
use crate::state::sources::{OutlineSource, TerrainSource};
use crate::state::GameState;

/// Outcome of a refresh; its `generation` signals that derived data changed
#[derive(Debug, Clone, Serialize)]
pub struct RefreshReport {
    pub generation: u64,
    pub boundary_nodes: usize,
    pub real_pass: BuildStats,
    pub boundary_pass: BuildStats,
    pub altitudes_applied: usize,
    pub activity: Vec<ActivityScore>,
}

impl GameState {
    /// Rebuild boundary nodes, proximity graph, altitudes and activity
    pub fn refresh(
        &mut self,
        outline: &dyn OutlineSource,
        terrain: &dyn TerrainSource,
        config: &EngineConfig,
        now: Timestamp,
    ) -> Result<RefreshReport> {
        let boundary =
            BoundaryNodeSynthesizer::new(config).synthesize(&mut self.nodes, outline.hulls())?;

        let (real_pass, boundary_pass) =
            ProximityGraphBuilder::new(config).build_full(&mut self.nodes);

        let altitudes = terrain.altitudes_for(self.nodes.real_count());
        let altitudes_applied = AltitudeEnricher::apply(&mut self.nodes, &altitudes);

        let activity =
            ActivityClassifier::new(config).apply(&mut self.nodes, &self.cells, &self.events, now);

        self.generation += 1;
        tracing::info!(
            generation = self.generation,
            real_nodes = real_pass.targets,
            boundary_nodes = boundary.len(),
            altitudes = altitudes_applied,
            "chokepoint graph rebuilt"
        );

        Ok(RefreshReport {
            generation: self.generation,
            boundary_nodes: boundary.len(),
            real_pass,
            boundary_pass,
            altitudes_applied,
            activity,
        })
    }

    /// Open one side of every active, unresolved firebase pair
    pub fn resolve_firebases(&mut self, outline: &dyn OutlineSource) -> FirebaseResolution {
        FirebasePairResolver::resolve(&mut self.firebases, |node| outline.is_frontline(node))
    }
}
