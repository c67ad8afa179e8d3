//! Session registry
//!
//! Id-keyed live sessions sharing one monotonic clock origin. The server
//! owns a registry behind `Arc<Mutex<...>>`; the feedback runner polls it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

use crate::catalog;
use crate::error::EngineError;
use crate::events::GameEvent;
use crate::session::GameSession;
use crate::stats::{accuracy, AggregateStats, GameTally};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct SessionRegistry {
    sessions: HashMap<SessionId, GameSession>,
    next_session_id: u64,
    sessions_created: u64,
    origin: Instant,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            next_session_id: 1,
            sessions_created: 0,
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the registry was created - the shared session clock.
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    pub fn create_session(
        &mut self,
        game_key: &str,
        filters: &[(String, String)],
        seed: Option<u64>,
    ) -> Result<SessionId, EngineError> {
        let spec = catalog::find_game(game_key)
            .ok_or_else(|| EngineError::UnknownGame(game_key.to_string()))?;
        let now = self.now_ms();
        let session = match seed {
            Some(seed) => GameSession::with_seed(spec, filters, seed, now)?,
            None => GameSession::new(spec, filters, now)?,
        };

        let id = SessionId(self.next_session_id);
        self.next_session_id += 1;
        self.sessions_created += 1;
        self.sessions.insert(id, session);
        Ok(id)
    }

    /// Adopt a session rebuilt from a snapshot.
    pub fn insert_session(&mut self, session: GameSession) -> SessionId {
        let id = SessionId(self.next_session_id);
        self.next_session_id += 1;
        self.sessions_created += 1;
        self.sessions.insert(id, session);
        id
    }

    pub fn get(&self, id: SessionId) -> Option<&GameSession> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut GameSession> {
        self.sessions.get_mut(&id)
    }

    pub fn remove(&mut self, id: SessionId) -> Option<GameSession> {
        self.sessions.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Process due feedback timers across every live session. Sessions with
    /// nothing pending are skipped.
    pub fn poll_all(&mut self, now_ms: u64) -> Vec<(SessionId, GameEvent)> {
        let mut fired = Vec::new();
        for (id, session) in self.sessions.iter_mut() {
            if session
                .state
                .timers
                .next_deadline()
                .is_some_and(|at| at <= now_ms)
            {
                for event in session.poll(now_ms) {
                    fired.push((*id, event));
                }
            }
        }
        fired
    }

    pub fn aggregate_stats(&self) -> AggregateStats {
        let mut total_attempts: u64 = 0;
        let mut total_matches: u64 = 0;
        let mut completed: u32 = 0;
        let mut per_game: HashMap<&'static str, GameTally> = HashMap::new();

        for session in self.sessions.values() {
            total_attempts += session.state.attempts as u64;
            total_matches += session.state.score as u64;
            if session.state.complete {
                completed += 1;
            }
            let tally = per_game
                .entry(session.spec.key)
                .or_insert_with(|| GameTally {
                    game: session.spec.key.to_string(),
                    sessions: 0,
                    completed: 0,
                });
            tally.sessions += 1;
            if session.state.complete {
                tally.completed += 1;
            }
        }

        let mut per_game: Vec<GameTally> = per_game.into_values().collect();
        per_game.sort_by(|a, b| a.game.cmp(&b.game));

        AggregateStats {
            generated_at: chrono::Utc::now(),
            sessions_created: self.sessions_created,
            live_sessions: self.sessions.len() as u32,
            completed_sessions: completed,
            total_attempts,
            total_matches,
            overall_accuracy: accuracy(
                total_matches.min(u32::MAX as u64) as u32,
                total_attempts.min(u32::MAX as u64) as u32,
            ),
            per_game,
        }
    }

    /// Most recent events across all sessions, oldest first.
    pub fn recent_events(&self, count: usize) -> Vec<(SessionId, GameEvent)> {
        let mut all: Vec<(SessionId, GameEvent)> = self
            .sessions
            .iter()
            .flat_map(|(id, s)| {
                s.state
                    .event_log
                    .get_recent(count)
                    .into_iter()
                    .map(|e| (*id, e))
            })
            .collect();
        all.sort_by_key(|(_, e)| e.at_ms);
        let start = all.len().saturating_sub(count);
        all.split_off(start)
    }

    pub fn event_count(&self) -> usize {
        self.sessions.values().map(|s| s.state.event_log.len()).sum()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordId;

    #[test]
    fn test_create_and_lookup() {
        let mut registry = SessionRegistry::new();
        let id = registry.create_session("battles", &[], Some(1)).unwrap();
        assert!(registry.get(id).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_game_rejected() {
        let mut registry = SessionRegistry::new();
        let err = registry.create_session("chess", &[], None).unwrap_err();
        assert!(matches!(err, EngineError::UnknownGame(_)));
    }

    #[test]
    fn test_poll_all_fires_due_timers_only() {
        let mut registry = SessionRegistry::new();
        let id = registry.create_session("battles", &[], Some(1)).unwrap();

        let session = registry.get_mut(id).unwrap();
        session.select(0, RecordId(1), 0).unwrap();
        session.select(1, RecordId(2), 0).unwrap();
        session.select(2, RecordId(3), 0).unwrap();

        assert!(registry.poll_all(100).is_empty());
        let fired = registry.poll_all(3000);
        assert!(!fired.is_empty());
        assert!(fired.iter().all(|(fid, _)| *fid == id));
    }

    #[test]
    fn test_aggregate_stats_counts_sessions() {
        let mut registry = SessionRegistry::new();
        registry.create_session("battles", &[], Some(1)).unwrap();
        registry.create_session("foods", &[], Some(2)).unwrap();
        let removed = registry.create_session("foods", &[], Some(3)).unwrap();
        registry.remove(removed);

        let stats = registry.aggregate_stats();
        assert_eq!(stats.sessions_created, 3);
        assert_eq!(stats.live_sessions, 2);
        assert_eq!(stats.per_game.len(), 2);
    }
}
