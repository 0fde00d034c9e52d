//! Engine configuration with documented constants
//!
//! All tuning values of the chokepoint engine are collected here with an
//! explanation of what they control. Distances are in octets, times in seconds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{ChokeError, Result};

/// Configuration for the chokepoint graph and activity systems
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === PROXIMITY GRAPH ===
    /// Maximum distance at which a non-linked candidate becomes a neighbor
    pub max_distance: f64,

    /// Maximum distance at which an explicit link is kept as a neighbor
    ///
    /// Links are authored across longer gaps than plain proximity, so this
    /// is normally larger than `max_distance`.
    pub max_link_distance: f64,

    /// Degrees added to an explicit link's bearing when it collides with
    /// another link at the same angle
    pub angle_epsilon: f64,

    // === BOUNDARY NODES ===
    /// How far outside a hull edge each boundary node is placed
    pub dummy_distance: f64,

    // === ACTIVITY ===
    /// Window for capture and firebase events (20 minutes)
    pub capture_window_secs: u64,

    /// Multiplier turning weighted captures into activity points
    pub capture_weight: u32,

    /// How many captures one destroyed firebase counts as
    pub firebase_destroyed_weight: u32,

    /// Edge length of one map cell
    pub cell_size: f64,

    /// A cell counts toward a node when its center lies within this radius
    pub cell_influence_radius: f64,

    /// Activity above this is at least Light
    pub light_threshold: u32,

    /// Activity above this is at least Moderate
    pub moderate_threshold: u32,

    /// Activity above this is Heavy
    pub heavy_threshold: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Proximity
            max_distance: 25.0,
            max_link_distance: 40.0,
            angle_epsilon: 0.001,

            // Boundary
            dummy_distance: 15.0,

            // Activity
            capture_window_secs: 20 * 60,
            capture_weight: 4,
            firebase_destroyed_weight: 2,
            cell_size: 1.0,
            cell_influence_radius: 3.0,
            light_threshold: 20,
            moderate_threshold: 40,
            heavy_threshold: 80,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("max_distance", self.max_distance),
            ("max_link_distance", self.max_link_distance),
            ("dummy_distance", self.dummy_distance),
            ("cell_size", self.cell_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ChokeError::InvalidConfig(format!(
                    "{} must be positive and finite (got {})",
                    name, value
                )));
            }
        }

        if self.max_link_distance < self.max_distance {
            return Err(ChokeError::InvalidConfig(format!(
                "max_link_distance ({}) must not be below max_distance ({})",
                self.max_link_distance, self.max_distance
            )));
        }

        if !(self.cell_influence_radius.is_finite() && self.cell_influence_radius >= 0.0) {
            return Err(ChokeError::InvalidConfig(format!(
                "cell_influence_radius must be non-negative (got {})",
                self.cell_influence_radius
            )));
        }

        // Epsilon must stay well below the resolution of a real bearing difference
        if !(self.angle_epsilon > 0.0 && self.angle_epsilon < 1.0) {
            return Err(ChokeError::InvalidConfig(format!(
                "angle_epsilon must be in (0, 1) degrees (got {})",
                self.angle_epsilon
            )));
        }

        if !(self.light_threshold < self.moderate_threshold
            && self.moderate_threshold < self.heavy_threshold)
        {
            return Err(ChokeError::InvalidConfig(format!(
                "activity thresholds must be ascending (light {}, moderate {}, heavy {})",
                self.light_threshold, self.moderate_threshold, self.heavy_threshold
            )));
        }

        Ok(())
    }
}
