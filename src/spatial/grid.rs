//! Sparse grid of map cells carrying recent death counts

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{OctetPos, Vec2};
use crate::spatial::geometry::distance;

/// Grid coordinates of a map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One map cell as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCell {
    pub pos: CellPos,
    pub recent_deaths: u32,
}

/// Map cells keyed by grid position
#[derive(Debug, Clone)]
pub struct DeathGrid {
    cell_size: f64,
    influence_radius: f64,
    cells: AHashMap<CellPos, MapCell>,
}

impl DeathGrid {
    pub fn new(cell_size: f64, influence_radius: f64) -> Self {
        Self {
            cell_size,
            influence_radius,
            cells: AHashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Insert or replace the cell at `cell.pos`
    pub fn insert(&mut self, cell: MapCell) {
        self.cells.insert(cell.pos, cell);
    }

    #[inline]
    pub fn get(&self, pos: CellPos) -> Option<&MapCell> {
        self.cells.get(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &MapCell> {
        self.cells.values()
    }

    /// Cell center in octet coordinates
    pub fn cell_center(&self, pos: CellPos) -> Vec2 {
        Vec2::new(
            (pos.x as f64 + 0.5) * self.cell_size,
            (pos.y as f64 + 0.5) * self.cell_size,
        )
    }

    /// Whether `pos` lies within influence range of a node at `node_pos`
    pub fn is_near(&self, pos: CellPos, node_pos: OctetPos) -> bool {
        distance(self.cell_center(pos), node_pos.to_vec2()) <= self.influence_radius
    }

    /// Sum of recent deaths over every cell near `node_pos`
    pub fn deaths_near(&self, node_pos: OctetPos) -> u32 {
        self.cells
            .values()
            .filter(|cell| self.is_near(cell.pos, node_pos))
            .map(|cell| cell.recent_deaths)
            .fold(0u32, u32::saturating_add)
    }

    /// Rebuild grid from reported cells
    pub fn rebuild(&mut self, cells: impl IntoIterator<Item = MapCell>) {
        self.clear();
        for cell in cells {
            self.insert(cell);
        }
    }
}
