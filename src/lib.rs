//! chokemap - chokepoint graph engine for a live battle map
//!
//! Derives the proximity graph, boundary ring, altitude, activity level and
//! firebase state of a polled game-world snapshot.

pub mod activity;
pub mod chokepoint;
pub mod core;
pub mod firebase;
pub mod spatial;
pub mod state;
