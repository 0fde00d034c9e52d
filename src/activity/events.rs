//! Recent game events as polled from the server

use serde::{Deserialize, Serialize};

use crate::core::types::{NodeId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Capture,
    FirebaseDestroyed,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub at: Timestamp,
    pub kind: EventKind,
    pub node: NodeId,
}

impl GameEvent {
    pub fn new(at: Timestamp, kind: EventKind, node: NodeId) -> Self {
        Self { at, kind, node }
    }
}

/// Chronicle of polled events, oldest first
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event, keeping the log sorted by time
    pub fn push(&mut self, event: GameEvent) {
        let idx = self.events.partition_point(|e| e.at <= event.at);
        self.events.insert(idx, event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.push(event);
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Events with `from <= at <= until`
    pub fn between(&self, from: Timestamp, until: Timestamp) -> impl Iterator<Item = &GameEvent> {
        let start = self.events.partition_point(|e| e.at < from);
        self.events[start..].iter().take_while(move |e| e.at <= until)
    }

    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }
}
