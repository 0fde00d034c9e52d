//! Full refresh cycles over hand-built maps

use chokemap::activity::{ActivityLevel, EventKind, GameEvent};
use chokemap::chokepoint::{ChokePoint, NodeArena, NodeSet};
use chokemap::core::types::{NodeId, OctetPos};
use chokemap::core::EngineConfig;
use chokemap::spatial::{CellPos, MapCell};
use chokemap::state::{GameState, Snapshot, StaticOutline, StaticTerrain};

fn node(id: u32, x: i32, y: i32) -> ChokePoint {
    ChokePoint::new(NodeId(id), format!("cp{}", id), OctetPos::new(x, y))
}

fn nearby(state: &GameState, id: u32) -> Vec<NodeId> {
    state.nodes.get(NodeId(id)).unwrap().nearby.clone()
}

#[test]
fn test_linked_pair_sees_each_other() {
    let config = EngineConfig::default();
    let arena = NodeArena::from_real([
        node(0, 0, 0).with_links([NodeId(1)]),
        node(1, 1, 0).with_links([NodeId(0)]),
    ])
    .unwrap();
    let mut state = GameState::new(&config).with_nodes(arena);

    state
        .refresh(&StaticOutline::default(), &StaticTerrain::default(), &config, 0)
        .unwrap();

    assert_eq!(nearby(&state, 0), vec![NodeId(1)]);
    assert_eq!(nearby(&state, 1), vec![NodeId(0)]);
}

#[test]
fn test_real_pass_never_links_boundary_nodes_forward() {
    let config = EngineConfig::default();
    // Counter-clockwise square, ten octets a side
    let arena = NodeArena::from_real([
        node(0, 0, 0),
        node(1, 0, 10),
        node(2, 10, 10),
        node(3, 10, 0),
    ])
    .unwrap();
    let mut state = GameState::new(&config).with_nodes(arena);
    let outline = StaticOutline::new(vec![vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]], []);

    let report = state
        .refresh(&outline, &StaticTerrain::default(), &config, 0)
        .unwrap();

    assert_eq!(report.boundary_nodes, 4);
    assert_eq!(report.real_pass.targets, 4);
    assert_eq!(report.boundary_pass.targets, 4);

    // Every boundary id on a real node must be a back-link
    for real in state.nodes.iter(NodeSet::Real) {
        for &other in &real.nearby {
            let other = state.nodes.get(other).unwrap();
            if other.is_boundary() {
                assert!(other.nearby.contains(&real.id));
            }
        }
    }
    // The boundary node west of edge 0 -> 1 reaches both ends of that edge
    let west = state.nodes.get(NodeId(4)).unwrap();
    assert_eq!(west.pos, OctetPos::new(-15, 5));
    assert!(west.nearby.contains(&NodeId(0)));
    assert!(west.nearby.contains(&NodeId(1)));
}

#[test]
fn test_activity_levels_through_refresh() {
    let config = EngineConfig::default();
    let arena = NodeArena::from_real([
        node(0, 0, 0),
        node(1, 100, 0),
        node(2, 200, 0),
        node(3, 300, 0),
    ])
    .unwrap();
    let mut state = GameState::new(&config).with_nodes(arena);
    let now = 5_000;

    // 21 deaths near node 0
    state.cells.insert(MapCell {
        pos: CellPos::new(0, 0),
        recent_deaths: 21,
    });
    // 81 deaths near node 2
    state.cells.insert(MapCell {
        pos: CellPos::new(200, 0),
        recent_deaths: 81,
    });
    // 11 captures at node 1 (9 plain + 1 destroyed firebase)
    for i in 0..9 {
        state
            .events
            .push(GameEvent::new(now - 10 * i, EventKind::Capture, NodeId(1)));
    }
    state
        .events
        .push(GameEvent::new(now - 5, EventKind::FirebaseDestroyed, NodeId(1)));

    let report = state
        .refresh(&StaticOutline::default(), &StaticTerrain::default(), &config, now)
        .unwrap();

    let level = |id: u32| state.nodes.get(NodeId(id)).unwrap().activity;
    assert_eq!(level(0), ActivityLevel::Light);
    assert_eq!(level(1), ActivityLevel::Moderate);
    assert_eq!(level(2), ActivityLevel::Heavy);
    assert_eq!(level(3), ActivityLevel::None);
    assert_eq!(report.activity[1].captures, 11);
    assert_eq!(report.activity[1].score, 44);
}

#[test]
fn test_stale_events_drop_out_of_window() {
    let config = EngineConfig::default();
    let arena = NodeArena::from_real([node(0, 0, 0)]).unwrap();
    let mut state = GameState::new(&config).with_nodes(arena);
    state
        .events
        .push(GameEvent::new(1_000, EventKind::Capture, NodeId(0)));

    let outline = StaticOutline::default();
    let terrain = StaticTerrain::default();
    state.refresh(&outline, &terrain, &config, 1_100).unwrap();
    assert_eq!(state.nodes.get(NodeId(0)).unwrap().activity, ActivityLevel::Low);

    state.refresh(&outline, &terrain, &config, 1_000 + 1_201).unwrap();
    assert_eq!(state.nodes.get(NodeId(0)).unwrap().activity, ActivityLevel::None);
}

#[test]
fn test_altitudes_skip_holes_and_sentinels() {
    let config = EngineConfig::default();
    let arena = NodeArena::from_real([node(0, 0, 0), node(2, 4, 0), node(3, 8, 0)]).unwrap();
    let mut state = GameState::new(&config).with_nodes(arena);

    let report = state
        .refresh(
            &StaticOutline::default(),
            &StaticTerrain::new(vec![310, 999, 0]),
            &config,
            0,
        )
        .unwrap();

    assert_eq!(report.altitudes_applied, 1);
    assert_eq!(state.nodes.get(NodeId(0)).unwrap().altitude, Some(310));
    assert_eq!(state.nodes.get(NodeId(2)).unwrap().altitude, None);
    assert_eq!(state.nodes.get(NodeId(3)).unwrap().altitude, None);
}

#[test]
fn test_unknown_hull_node_is_an_error() {
    let config = EngineConfig::default();
    let arena = NodeArena::from_real([node(0, 0, 0), node(1, 4, 0)]).unwrap();
    let mut state = GameState::new(&config).with_nodes(arena);
    let outline = StaticOutline::new(vec![vec![NodeId(0), NodeId(1), NodeId(7)]], []);

    let result = state.refresh(&outline, &StaticTerrain::default(), &config, 0);

    assert!(result.is_err());
    assert_eq!(state.generation(), 0);
}

#[test]
fn test_snapshot_round_trip_through_refresh() {
    let json = r#"{
        "nodes": [
            {"id": 0, "name": "Sedan", "pos": {"x": 0, "y": 0}, "links": [1]},
            {"id": 1, "name": "Bouillon", "pos": {"x": 0, "y": 12}, "links": [0, 2]},
            {"id": 2, "name": "Givet", "pos": {"x": 12, "y": 6}, "links": [1]}
        ],
        "hulls": [[0, 1, 2]],
        "frontline": [2],
        "altitudes": [180, 240, 0],
        "firebases": [
            {"link": "brigade_contested", "sides": [
                {"facility": 20, "chokepoint": 0},
                {"facility": 21, "chokepoint": 2}
            ]},
            {"link": "normal", "sides": [
                {"facility": 30, "chokepoint": 1},
                {"facility": 31, "chokepoint": 2}
            ]}
        ]
    }"#;
    let config = EngineConfig::default();
    let (mut state, outline, terrain) = Snapshot::from_json_str(json)
        .unwrap()
        .into_state(&config)
        .unwrap();

    let first = state.refresh(&outline, &terrain, &config, 0).unwrap();
    let graph = state.nodes.clone();
    let second = state.refresh(&outline, &terrain, &config, 0).unwrap();

    assert_eq!(first.boundary_nodes, 3);
    assert_eq!(second.generation, 2);
    assert_eq!(state.nodes.slots(), graph.slots());

    let resolution = state.resolve_firebases(&outline);
    // Brigade pair opens the front-line side; 30 + 31 is odd so 30 opens
    assert_eq!(
        resolution.opened,
        vec![chokemap::core::types::FacilityId(21), chokemap::core::types::FacilityId(30)]
    );
    assert!(resolution.violations.is_empty());
}
