//! Scoring and statistics views

use serde::{Deserialize, Serialize};

use crate::session::GameSession;

/// Rounded percentage in [0, 100]; 0 before the first attempt.
pub fn accuracy(score: u32, attempts: u32) -> u32 {
    if attempts == 0 {
        return 0;
    }
    (score as f64 / attempts as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: u32,
    pub attempts: u32,
    pub accuracy: u32,
    pub matched: u32,
    pub remaining: u32,
    pub complete: bool,
}

pub fn session_stats(session: &GameSession) -> SessionStats {
    let state = &session.state;
    SessionStats {
        score: state.score,
        attempts: state.attempts,
        accuracy: accuracy(state.score, state.attempts),
        matched: state.matched.len() as u32,
        remaining: (state.active.len() - state.matched.len()) as u32,
        complete: state.complete,
    }
}

/// Platform-wide aggregates over the session registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateStats {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub sessions_created: u64,
    pub live_sessions: u32,
    pub completed_sessions: u32,
    pub total_attempts: u64,
    pub total_matches: u64,
    pub overall_accuracy: u32,
    pub per_game: Vec<GameTally>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTally {
    pub game: String,
    pub sessions: u32,
    pub completed: u32,
}
