//! Session event log
//!
//! Everything observable that happens in a session is recorded as an event
//! with a session-relative timestamp, for the statistics endpoints and the
//! feedback runner's callback.

use serde::{Deserialize, Serialize};

use crate::records::RecordId;
use crate::theme::CelebrationTheme;

/// Events are kept per session; the log is bounded to avoid unbounded growth
/// in long-lived sessions.
const MAX_EVENTS: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEventKind {
    SessionStarted,
    ItemSelected { column: usize, id: RecordId },
    MatchCorrect { id: RecordId },
    MatchIncorrect { ids: Vec<RecordId> },
    IncorrectCleared,
    SelectionsCleared,
    Celebration { theme: CelebrationTheme, grand: bool },
    GameComplete,
    FiltersChanged,
    SessionReset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Milliseconds since the session clock origin.
    pub at_ms: u64,
    #[serde(flatten)]
    pub kind: GameEventKind,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, at_ms: u64, kind: GameEventKind) -> GameEvent {
        let event = GameEvent { at_ms, kind };
        self.events.push(event.clone());
        if self.events.len() > MAX_EVENTS {
            let excess = self.events.len() - MAX_EVENTS;
            self.events.drain(..excess);
        }
        event
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent `count` events, oldest first.
    pub fn get_recent(&self, count: usize) -> Vec<GameEvent> {
        let start = self.events.len().saturating_sub(count);
        self.events[start..].to_vec()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
