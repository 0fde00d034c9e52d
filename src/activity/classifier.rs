//! Front-line activity estimate per chokepoint
//!
//! Activity is a fresh windowed aggregate on every call:
//! `deaths near the node + weighted captures * capture_weight`.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::activity::events::{EventKind, EventLog};
use crate::chokepoint::arena::{NodeArena, NodeSet};
use crate::core::config::EngineConfig;
use crate::core::types::{NodeId, Timestamp};
use crate::spatial::grid::DeathGrid;

/// Discrete combat intensity near a chokepoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[default]
    None,
    Low,
    Light,
    Moderate,
    Heavy,
}

impl ActivityLevel {
    /// Bucket a raw activity score
    pub fn from_score(score: u32, config: &EngineConfig) -> Self {
        if score == 0 {
            Self::None
        } else if score > config.heavy_threshold {
            Self::Heavy
        } else if score > config.moderate_threshold {
            Self::Moderate
        } else if score > config.light_threshold {
            Self::Light
        } else {
            Self::Low
        }
    }
}

/// Breakdown of one node's activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityScore {
    pub node: NodeId,
    pub deaths: u32,
    /// Weighted capture count (a destroyed firebase counts double)
    pub captures: u32,
    pub score: u32,
    pub level: ActivityLevel,
}

pub struct ActivityClassifier<'a> {
    config: &'a EngineConfig,
}

impl<'a> ActivityClassifier<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Weighted captures per node within the window ending at `now`
    pub fn captures_by_node(&self, events: &EventLog, now: Timestamp) -> AHashMap<NodeId, u32> {
        let from = now.saturating_sub(self.config.capture_window_secs);
        let mut captures: AHashMap<NodeId, u32> = AHashMap::new();
        for event in events.between(from, now) {
            let weight = match event.kind {
                EventKind::Capture => 1,
                EventKind::FirebaseDestroyed => self.config.firebase_destroyed_weight,
                EventKind::Other => continue,
            };
            let tally = captures.entry(event.node).or_default();
            *tally = tally.saturating_add(weight);
        }
        captures
    }

    pub fn score(&self, deaths: u32, captures: u32) -> u32 {
        deaths.saturating_add(captures.saturating_mul(self.config.capture_weight))
    }

    /// Recompute the activity level of every real node
    pub fn apply(
        &self,
        arena: &mut NodeArena,
        grid: &DeathGrid,
        events: &EventLog,
        now: Timestamp,
    ) -> Vec<ActivityScore> {
        let captures = self.captures_by_node(events, now);

        let mut scores = Vec::new();
        for node in arena.iter_mut(NodeSet::Real) {
            let deaths = grid.deaths_near(node.pos);
            let node_captures = captures.get(&node.id).copied().unwrap_or(0);
            let score = self.score(deaths, node_captures);
            let level = ActivityLevel::from_score(score, self.config);
            node.activity = level;
            scores.push(ActivityScore {
                node: node.id,
                deaths,
                captures: node_captures,
                score,
                level,
            });
        }
        scores
    }
}
