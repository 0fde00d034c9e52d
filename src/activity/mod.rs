//! Combat activity around chokepoints

pub mod classifier;
pub mod events;

pub use classifier::{ActivityClassifier, ActivityLevel, ActivityScore};
pub use events::{EventKind, EventLog, GameEvent};
