//! Spatial primitives: planar geometry and the map-cell grid

pub mod geometry;
pub mod grid;

pub use grid::{CellPos, DeathGrid, MapCell};
