//! Chokepoint graph - nodes, storage, and derived topology

pub mod altitude;
pub mod arena;
pub mod boundary;
pub mod node;
pub mod proximity;

pub use altitude::AltitudeEnricher;
pub use arena::{NodeArena, NodeSet, Slot};
pub use boundary::BoundaryNodeSynthesizer;
pub use node::{ChokePoint, NodeKind};
pub use proximity::{BuildStats, ProximityGraphBuilder};
