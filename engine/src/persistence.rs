//! Persistence module for export/import of game sessions
//!
//! Serializes a session to JSON for explicit save/transfer and restores it.
//! Transient feedback state (selections, incorrect flags, pending timers) is
//! deliberately not part of a snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog;
use crate::error::SnapshotError;
use crate::events::{EventLog, GameEventKind};
use crate::records::RecordId;
use crate::session::{GameSession, SessionState};
use crate::systems::filtering;
use crate::timers::FeedbackTimers;

/// Complete session state for persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u8, // Schema version for forward compatibility
    pub game: String,
    pub seed: u64,
    pub filters: Vec<(String, String)>,
    pub column_order: Vec<Vec<RecordId>>,
    pub matched: Vec<RecordId>,
    pub score: u32,
    pub attempts: u32,
    pub complete: bool,
}

const SNAPSHOT_VERSION: u8 = 1;

/// Export a session to a JSON string.
pub fn export_session(session: &GameSession) -> String {
    let state = &session.state;
    let mut matched: Vec<RecordId> = state.matched.iter().copied().collect();
    matched.sort_unstable();

    let snapshot = SessionSnapshot {
        version: SNAPSHOT_VERSION,
        game: session.spec.key.to_string(),
        seed: session.seed,
        filters: state.filters.clone(),
        column_order: state.column_order.clone(),
        matched,
        score: state.score,
        attempts: state.attempts,
        complete: state.complete,
    };

    serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
}

/// Import a session from a JSON string.
pub fn import_session(json: &str) -> Result<GameSession, SnapshotError> {
    let snapshot: SessionSnapshot = serde_json::from_str(json)?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(snapshot.version));
    }

    let spec = catalog::find_game(&snapshot.game)
        .ok_or_else(|| SnapshotError::UnknownGame(snapshot.game.clone()))?;

    filtering::validate_filters(spec, &snapshot.filters)
        .map_err(|e| SnapshotError::Inconsistent(e.to_string()))?;
    let active = filtering::active_records(spec, &snapshot.filters);
    let active_set: HashSet<RecordId> = active.iter().copied().collect();

    // Column orders must be permutations of the active set.
    if snapshot.column_order.len() != spec.columns.len() {
        return Err(SnapshotError::Inconsistent(format!(
            "expected {} column orders, got {}",
            spec.columns.len(),
            snapshot.column_order.len()
        )));
    }
    for order in &snapshot.column_order {
        let order_set: HashSet<RecordId> = order.iter().copied().collect();
        if order.len() != active.len() || order_set != active_set {
            return Err(SnapshotError::Inconsistent(
                "column order is not a permutation of the active dataset".to_string(),
            ));
        }
    }

    let matched: HashSet<RecordId> = snapshot.matched.iter().copied().collect();
    if !matched.is_subset(&active_set) {
        return Err(SnapshotError::Inconsistent(
            "matched set contains records outside the active dataset".to_string(),
        ));
    }
    if snapshot.score as usize != matched.len() {
        return Err(SnapshotError::Inconsistent(format!(
            "score {} does not match {} matched records",
            snapshot.score,
            matched.len()
        )));
    }
    if snapshot.attempts < snapshot.score {
        return Err(SnapshotError::Inconsistent(
            "attempts lower than score".to_string(),
        ));
    }
    let expect_complete = !active.is_empty() && matched.len() == active.len();
    if snapshot.complete != expect_complete {
        return Err(SnapshotError::Inconsistent(
            "completion flag disagrees with matched set".to_string(),
        ));
    }

    let mut event_log = EventLog::new();
    event_log.push(0, GameEventKind::SessionStarted);

    let state = SessionState {
        filters: snapshot.filters,
        active,
        column_order: snapshot.column_order,
        selections: vec![None; spec.columns.len()],
        matched,
        incorrect: HashSet::new(),
        score: snapshot.score,
        attempts: snapshot.attempts,
        complete: snapshot.complete,
        timers: FeedbackTimers::default(),
        event_log,
    };

    Ok(GameSession::restore(spec, snapshot.seed, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_session() -> GameSession {
        let spec = catalog::find_game("battles").unwrap();
        let mut session = GameSession::with_seed(spec, &[], 42, 0).unwrap();
        let id = RecordId(10);
        session.select(0, id, 0).unwrap();
        session.select(1, id, 0).unwrap();
        session.select(2, id, 0).unwrap();
        session.poll(5000);
        session
    }

    #[test]
    fn test_export_import_round_trip() {
        let session = played_session();
        let json = export_session(&session);
        let restored = import_session(&json).unwrap();

        assert_eq!(restored.spec.key, "battles");
        assert_eq!(restored.seed, 42);
        assert_eq!(restored.state.score, 1);
        assert_eq!(restored.state.attempts, 1);
        assert_eq!(restored.state.column_order, session.state.column_order);
        assert!(restored.state.matched.contains(&RecordId(10)));
        // Transient state starts clean.
        assert!(restored.state.selections.iter().all(Option::is_none));
        assert!(!restored.state.timers.any_pending());
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let session = played_session();
        let mut value: serde_json::Value = serde_json::from_str(&export_session(&session)).unwrap();
        value["version"] = serde_json::json!(99);
        let err = import_session(&value.to_string()).unwrap_err();
        assert!(matches!(err, SnapshotError::UnsupportedVersion(99)));
    }

    #[test]
    fn test_unknown_game_rejected() {
        let session = played_session();
        let mut value: serde_json::Value = serde_json::from_str(&export_session(&session)).unwrap();
        value["game"] = serde_json::json!("draughts");
        let err = import_session(&value.to_string()).unwrap_err();
        assert!(matches!(err, SnapshotError::UnknownGame(_)));
    }

    #[test]
    fn test_tampered_score_rejected() {
        let session = played_session();
        let mut value: serde_json::Value = serde_json::from_str(&export_session(&session)).unwrap();
        value["score"] = serde_json::json!(5);
        let err = import_session(&value.to_string()).unwrap_err();
        assert!(matches!(err, SnapshotError::Inconsistent(_)));
    }

    #[test]
    fn test_restored_session_plays_on() {
        let session = played_session();
        let mut restored = import_session(&export_session(&session)).unwrap();

        let id = RecordId(11);
        restored.select(0, id, 100).unwrap();
        restored.select(1, id, 100).unwrap();
        restored.select(2, id, 100).unwrap();
        assert_eq!(restored.state.score, 2);
    }
}
