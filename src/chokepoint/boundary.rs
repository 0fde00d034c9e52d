//! Boundary ("dummy") chokepoints ringing the outer hulls
//!
//! For every hull edge P -> Q a neutral, unlinked node is placed at the edge
//! midpoint pushed `dummy_distance` to the right of the edge direction. Hulls
//! arrive counter-clockwise on screen, which puts that side outside.

use crate::chokepoint::arena::NodeArena;
use crate::core::config::EngineConfig;
use crate::core::error::{ChokeError, Result};
use crate::core::types::{NodeId, OctetPos, Vec2};
use crate::spatial::geometry::{bearing, offset, point_in_polygon};

pub struct BoundaryNodeSynthesizer<'a> {
    config: &'a EngineConfig,
}

impl<'a> BoundaryNodeSynthesizer<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Replace all boundary nodes with a fresh ring around `hulls`
    ///
    /// Ids continue right after the real range, in hull-then-edge order.
    /// Fails without touching the arena if a hull names a missing real node.
    pub fn synthesize(&self, arena: &mut NodeArena, hulls: &[Vec<NodeId>]) -> Result<Vec<NodeId>> {
        for &id in hulls.iter().flatten() {
            if id.index() >= arena.real_count() || arena.get(id).is_none() {
                return Err(ChokeError::UnknownNode(id));
            }
        }

        arena.clear_boundary();

        let mut created = Vec::new();
        let mut inward = 0usize;
        for hull in hulls.iter().filter(|hull| hull.len() >= 2) {
            let ring: Vec<(Vec2, String)> = hull
                .iter()
                .filter_map(|&id| arena.get(id))
                .map(|node| (node.pos.to_vec2(), node.name.clone()))
                .collect();
            let outline: Vec<Vec2> = ring.iter().map(|(pos, _)| *pos).collect();

            for (i, (p, p_name)) in ring.iter().enumerate() {
                let (q, q_name) = &ring[(i + 1) % ring.len()];
                let heading = bearing(*p, *q);
                let spot = offset(p.midpoint(q), heading + 90.0, self.config.dummy_distance);

                if point_in_polygon(spot, &outline) {
                    inward += 1;
                }

                let id = arena.push_boundary(
                    format!("{} / {}", p_name, q_name),
                    OctetPos::from_vec2(spot),
                );
                created.push(id);
            }
        }

        if inward > 0 {
            tracing::warn!(inward, "boundary nodes placed inside their hull; check hull winding");
        }
        tracing::debug!(
            hulls = hulls.len(),
            boundary_nodes = created.len(),
            "boundary nodes synthesized"
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chokepoint::node::ChokePoint;

    fn real(id: u32, x: i32, y: i32) -> ChokePoint {
        ChokePoint::new(NodeId(id), format!("cp{}", id), OctetPos::new(x, y))
    }

    fn square() -> NodeArena {
        NodeArena::from_real([
            real(0, 0, 0),
            real(1, 0, 10),
            real(2, 10, 10),
            real(3, 10, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_one_node_per_edge_with_contiguous_ids() {
        let mut arena = square();
        let config = EngineConfig::default();
        let hull = vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)];

        let ids = BoundaryNodeSynthesizer::new(&config)
            .synthesize(&mut arena, &[hull])
            .unwrap();

        assert_eq!(ids, vec![NodeId(4), NodeId(5), NodeId(6), NodeId(7)]);
        assert!(ids.iter().all(|&id| arena.get(id).unwrap().is_boundary()));
    }

    #[test]
    fn test_counter_clockwise_hull_places_nodes_outside() {
        let mut arena = square();
        let config = EngineConfig {
            dummy_distance: 5.0,
            ..EngineConfig::default()
        };
        let hull = vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)];

        BoundaryNodeSynthesizer::new(&config)
            .synthesize(&mut arena, &[hull])
            .unwrap();

        // Edge 0 -> 1 runs south along x = 0, so its node sits west of it
        let first = arena.get(NodeId(4)).unwrap();
        assert_eq!(first.pos, OctetPos::new(-5, 5));
        assert_eq!(first.name, "cp0 / cp1");
        // Wrap-around edge 3 -> 0 runs west along y = 0, node sits north
        let last = arena.get(NodeId(7)).unwrap();
        assert_eq!(last.pos, OctetPos::new(5, -5));
    }

    #[test]
    fn test_rerun_replaces_previous_ring() {
        let mut arena = square();
        let config = EngineConfig::default();
        let synth = BoundaryNodeSynthesizer::new(&config);
        let hulls = vec![vec![NodeId(0), NodeId(1), NodeId(2)], vec![NodeId(3), NodeId(0)]];

        synth.synthesize(&mut arena, &hulls).unwrap();
        let again = synth.synthesize(&mut arena, &hulls).unwrap();

        assert_eq!(again.len(), 5);
        assert_eq!(arena.boundary_count(), 5);
        assert_eq!(again.first(), Some(&NodeId(4)));
    }

    #[test]
    fn test_degenerate_hull_contributes_nothing() {
        let mut arena = square();
        let config = EngineConfig::default();

        let ids = BoundaryNodeSynthesizer::new(&config)
            .synthesize(&mut arena, &[vec![NodeId(2)], vec![]])
            .unwrap();

        assert!(ids.is_empty());
    }

    #[test]
    fn test_unknown_hull_node_fails_cleanly() {
        let mut arena = NodeArena::from_real([real(0, 0, 0), real(2, 5, 5)]).unwrap();
        arena.push_boundary("old", OctetPos::new(9, 9));
        let config = EngineConfig::default();

        let err = BoundaryNodeSynthesizer::new(&config)
            .synthesize(&mut arena, &[vec![NodeId(0), NodeId(1), NodeId(2)]])
            .unwrap_err();

        assert!(matches!(err, ChokeError::UnknownNode(NodeId(1))));
        assert_eq!(arena.boundary_count(), 1);
    }
}
