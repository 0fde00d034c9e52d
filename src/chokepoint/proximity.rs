//! Proximity graph: angle-ordered neighbor lists for every chokepoint
//!
//! Each target collects at most one neighbor per compass bearing. Explicit
//! links are seeded first and always win a bearing; among plain candidates the
//! closer one wins and ties keep the earlier (lower id) candidate.
//!
//! The candidate scan is quadratic in node count, which is fine for maps of a
//! few hundred chokepoints.

use std::collections::BTreeMap;

use ahash::AHashMap;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::chokepoint::arena::{NodeArena, NodeSet};
use crate::chokepoint::node::NodeKind;
use crate::core::config::EngineConfig;
use crate::core::types::NodeId;
use crate::spatial::geometry::{bearing, distance};

/// Counters describing one builder pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Non-vacant targets whose lists were rebuilt
    pub targets: usize,
    /// Total neighbor entries on the targets after repair
    pub edges: usize,
    /// One-way edges removed from real targets
    pub dropped_one_way: usize,
    /// Back-links appended on behalf of boundary targets
    pub back_links_added: usize,
}

pub struct ProximityGraphBuilder<'a> {
    config: &'a EngineConfig,
}

impl<'a> ProximityGraphBuilder<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Both passes of a full refresh
    ///
    /// Real nodes only ever see real candidates; boundary nodes see everyone.
    pub fn build_full(&self, arena: &mut NodeArena) -> (BuildStats, BuildStats) {
        let real = self.build(arena, NodeSet::Real, NodeSet::Real);
        let boundary = self.build(arena, NodeSet::Boundary, NodeSet::All);
        (real, boundary)
    }

    /// Recompute `nearby` for every node in `targets` from `candidates`,
    /// then repair one-way edges among the rebuilt targets
    pub fn build(&self, arena: &mut NodeArena, targets: NodeSet, candidates: NodeSet) -> BuildStats {
        let target_ids = arena.ids(targets);
        let candidate_ids = arena.ids(candidates);

        for &id in &target_ids {
            let nearby = self.nearby_for(arena, id, &candidate_ids);
            if let Some(node) = arena.get_mut(id) {
                node.nearby = nearby;
            }
        }

        let mut stats = BuildStats {
            targets: target_ids.len(),
            ..BuildStats::default()
        };
        repair_symmetry(arena, &target_ids, &mut stats);

        stats.edges = target_ids
            .iter()
            .filter_map(|&id| arena.get(id))
            .map(|node| node.nearby.len())
            .sum();

        tracing::debug!(
            ?targets,
            ?candidates,
            targets_built = stats.targets,
            edges = stats.edges,
            dropped = stats.dropped_one_way,
            back_links = stats.back_links_added,
            "proximity pass complete"
        );
        stats
    }

    /// `candidate_ids` must be sorted ascending
    fn nearby_for(&self, arena: &NodeArena, target_id: NodeId, candidate_ids: &[NodeId]) -> Vec<NodeId> {
        let Some(target) = arena.get(target_id) else {
            return Vec::new();
        };
        let origin = target.pos.to_vec2();

        let mut by_angle: BTreeMap<OrderedFloat<f64>, NodeId> = BTreeMap::new();
        let mut dist_of: AHashMap<NodeId, f64> = AHashMap::new();

        for &link in &target.explicit_links {
            if link == target_id
                || dist_of.contains_key(&link)
                || candidate_ids.binary_search(&link).is_err()
            {
                continue;
            }
            let Some(other) = arena.get(link) else {
                continue;
            };
            let pos = other.pos.to_vec2();
            let d = distance(origin, pos);
            if d > self.config.max_link_distance {
                continue;
            }

            // Links never displace each other
            let mut angle = bearing(origin, pos);
            while by_angle.contains_key(&OrderedFloat(angle)) {
                angle += self.config.angle_epsilon;
            }
            by_angle.insert(OrderedFloat(angle), link);
            dist_of.insert(link, d);
        }

        for &cid in candidate_ids {
            if cid == target_id || dist_of.contains_key(&cid) {
                continue;
            }
            let Some(candidate) = arena.get(cid) else {
                continue;
            };
            let pos = candidate.pos.to_vec2();
            let d = distance(origin, pos);
            if d > self.config.max_distance {
                continue;
            }

            let key = OrderedFloat(bearing(origin, pos));
            match by_angle.get(&key).copied() {
                None => {
                    by_angle.insert(key, cid);
                    dist_of.insert(cid, d);
                }
                Some(existing) => {
                    if target.is_linked_to(existing) {
                        continue;
                    }
                    let existing_d = dist_of.get(&existing).copied().unwrap_or(f64::INFINITY);
                    if d < existing_d {
                        by_angle.insert(key, cid);
                        dist_of.remove(&existing);
                        dist_of.insert(cid, d);
                    }
                }
            }
        }

        by_angle.into_values().collect()
    }
}

/// Boundary targets push back-links onto neighbors that lack them; real
/// targets drop neighbors that do not list them back.
fn repair_symmetry(arena: &mut NodeArena, target_ids: &[NodeId], stats: &mut BuildStats) {
    for &t in target_ids {
        let Some(node) = arena.get(t) else {
            continue;
        };
        let kind = node.kind;
        let nearby = node.nearby.clone();

        for u in nearby {
            let reciprocal = arena
                .get(u)
                .map_or(false, |other| other.nearby.contains(&t));
            if reciprocal {
                continue;
            }

            match kind {
                NodeKind::Boundary => {
                    if let Some(other) = arena.get_mut(u) {
                        other.nearby.push(t);
                        stats.back_links_added += 1;
                    }
                }
                NodeKind::Real => {
                    if let Some(node) = arena.get_mut(t) {
                        node.nearby.retain(|&id| id != u);
                        stats.dropped_one_way += 1;
                    }
                }
            }
        }
    }
}
