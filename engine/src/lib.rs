//! Life in UK Match-Game Engine
//!
//! Generic N-column tuple-matching games over static datasets: shuffle,
//! filter, selection, evaluation, timed feedback and scoring, with a session
//! registry and a background feedback runner for the HTTP platform on top.

pub mod catalog;
pub mod error;
pub mod events;
pub mod persistence;
pub mod records;
pub mod registry;
pub mod runner;
pub mod session;
pub mod shuffle;
pub mod stats;
pub mod systems;
pub mod theme;
pub mod timers;

pub use error::{EngineError, SnapshotError};
pub use events::{GameEvent, GameEventKind};
pub use records::{ColumnSpec, FilterFacet, GameSpec, MatchRecord, RecordId};
pub use registry::{SessionId, SessionRegistry};
pub use runner::FeedbackRunner;
pub use session::GameSession;
pub use stats::{session_stats, AggregateStats, SessionStats};
pub use theme::CelebrationTheme;
