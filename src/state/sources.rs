//! Collaborators the engine reads from but does not compute

use ahash::AHashSet;

use crate::core::types::{Altitude, NodeId};

/// Outer hull chains and front-line status of the real node set
pub trait OutlineSource {
    /// Cyclic chains of real node ids, counter-clockwise on screen
    fn hulls(&self) -> &[Vec<NodeId>];

    fn is_frontline(&self, node: NodeId) -> bool;
}

/// Terrain altitude lookup
pub trait TerrainSource {
    /// One value per real node id; 0 means no data
    fn altitudes_for(&self, count: usize) -> Vec<Altitude>;
}

/// Outline captured in an imported snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticOutline {
    hulls: Vec<Vec<NodeId>>,
    frontline: AHashSet<NodeId>,
}

impl StaticOutline {
    pub fn new(hulls: Vec<Vec<NodeId>>, frontline: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            hulls,
            frontline: frontline.into_iter().collect(),
        }
    }
}

impl OutlineSource for StaticOutline {
    fn hulls(&self) -> &[Vec<NodeId>] {
        &self.hulls
    }

    fn is_frontline(&self, node: NodeId) -> bool {
        self.frontline.contains(&node)
    }
}

/// Altitudes captured in an imported snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticTerrain {
    values: Vec<Altitude>,
}

impl StaticTerrain {
    pub fn new(values: Vec<Altitude>) -> Self {
        Self { values }
    }
}

impl TerrainSource for StaticTerrain {
    fn altitudes_for(&self, count: usize) -> Vec<Altitude> {
        let mut values: Vec<Altitude> = self.values.iter().copied().take(count).collect();
        values.resize(count, 0);
        values
    }
}
