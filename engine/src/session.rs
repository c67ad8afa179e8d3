//! Game session - main orchestrator
//!
//! A session owns everything mutable about one play-through: the active
//! (filtered) dataset, per-column shuffled orders, selections, the matched
//! set, feedback timers, score counters and the event log. The static
//! dataset itself is shared, read-only.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use crate::error::EngineError;
use crate::events::{EventLog, GameEvent, GameEventKind};
use crate::records::{GameSpec, RecordId};
use crate::shuffle;
use crate::systems;
use crate::timers::FeedbackTimers;

/// Mutable per-session state, operated on by the systems.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub filters: Vec<(String, String)>,
    pub active: Vec<RecordId>,
    pub column_order: Vec<Vec<RecordId>>,
    pub selections: Vec<Option<RecordId>>,
    pub matched: HashSet<RecordId>,
    pub incorrect: HashSet<RecordId>,
    pub score: u32,
    pub attempts: u32,
    pub complete: bool,
    pub timers: FeedbackTimers,
    pub event_log: EventLog,
}

impl SessionState {
    pub(crate) fn emit(&mut self, at_ms: u64, kind: GameEventKind) -> GameEvent {
        self.event_log.push(at_ms, kind)
    }
}

#[derive(Debug)]
pub struct GameSession {
    pub spec: &'static GameSpec,
    pub seed: u64,
    pub state: SessionState,
    rng: StdRng,
}

impl GameSession {
    /// Start a session with a random seed.
    pub fn new(
        spec: &'static GameSpec,
        filters: &[(String, String)],
        now_ms: u64,
    ) -> Result<Self, EngineError> {
        Self::with_seed(spec, filters, rand::random::<u64>(), now_ms)
    }

    /// Start a session with an explicit seed (tests, snapshot reproduction).
    pub fn with_seed(
        spec: &'static GameSpec,
        filters: &[(String, String)],
        seed: u64,
        now_ms: u64,
    ) -> Result<Self, EngineError> {
        systems::filtering::validate_filters(spec, filters)?;
        let mut rng = StdRng::seed_from_u64(seed);

        let active = systems::filtering::active_records(spec, filters);
        let column_order = shuffle::shuffle_columns(&active, spec.columns.len(), &mut rng);

        let mut state = SessionState {
            filters: filters.to_vec(),
            active,
            column_order,
            selections: vec![None; spec.columns.len()],
            matched: HashSet::new(),
            incorrect: HashSet::new(),
            score: 0,
            attempts: 0,
            complete: false,
            timers: FeedbackTimers::default(),
            event_log: EventLog::new(),
        };
        state.emit(now_ms, GameEventKind::SessionStarted);

        Ok(Self { spec, seed, state, rng })
    }

    /// Rebuild a session from persisted parts. Column orders come from the
    /// snapshot, not from a replayed shuffle.
    pub(crate) fn restore(spec: &'static GameSpec, seed: u64, state: SessionState) -> Self {
        Self {
            spec,
            seed,
            state,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Click a record in a column. Evaluates the attempt as soon as every
    /// column holds a selection.
    pub fn select(
        &mut self,
        column: usize,
        id: RecordId,
        now_ms: u64,
    ) -> Result<Vec<GameEvent>, EngineError> {
        systems::selection::selection_system(&mut self.state, self.spec, column, id, now_ms)
    }

    /// Process any feedback timers that have come due.
    pub fn poll(&mut self, now_ms: u64) -> Vec<GameEvent> {
        systems::feedback::feedback_system(&mut self.state, self.spec, now_ms)
    }

    /// Replace the active filters. Fully reinitializes the game: new active
    /// set, fresh shuffles, all progress and timers discarded.
    pub fn set_filters(
        &mut self,
        filters: &[(String, String)],
        now_ms: u64,
    ) -> Result<Vec<GameEvent>, EngineError> {
        systems::filtering::validate_filters(self.spec, filters)?;
        self.state.filters = filters.to_vec();
        let event = self.reinitialize(now_ms, GameEventKind::FiltersChanged);
        Ok(vec![event])
    }

    /// Restart the current game with the same filters.
    pub fn reset(&mut self, now_ms: u64) -> Vec<GameEvent> {
        vec![self.reinitialize(now_ms, GameEventKind::SessionReset)]
    }

    fn reinitialize(&mut self, now_ms: u64, kind: GameEventKind) -> GameEvent {
        let state = &mut self.state;
        state.active = systems::filtering::active_records(self.spec, &state.filters);
        state.column_order =
            shuffle::shuffle_columns(&state.active, self.spec.columns.len(), &mut self.rng);
        state.selections = vec![None; self.spec.columns.len()];
        state.matched.clear();
        state.incorrect.clear();
        state.score = 0;
        state.attempts = 0;
        state.complete = false;
        state.timers.cancel_all();
        state.emit(now_ms, kind)
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::stats;
    use crate::timers::{
        CLEAR_AFTER_CORRECT_MS, CLEAR_AFTER_INCORRECT_MS, GRAND_CELEBRATION_MS, INCORRECT_FLAG_MS,
    };

    fn battles_session() -> GameSession {
        let spec = catalog::find_game("battles").unwrap();
        GameSession::with_seed(spec, &[], 42, 0).unwrap()
    }

    fn has_kind(events: &[GameEvent], pred: impl Fn(&GameEventKind) -> bool) -> bool {
        events.iter().any(|e| pred(&e.kind))
    }

    #[test]
    fn test_new_session_shuffles_every_column() {
        let session = battles_session();
        assert_eq!(session.state.active.len(), 21);
        assert_eq!(session.state.column_order.len(), 3);
        for order in &session.state.column_order {
            assert_eq!(order.len(), 21);
        }
    }

    #[test]
    fn test_correct_match_scores_and_celebrates() {
        // The documented scenario: Trafalgar is id 10 across all three columns.
        let mut session = battles_session();
        let id = RecordId(10);

        session.select(0, id, 10).unwrap();
        session.select(1, id, 20).unwrap();
        let events = session.select(2, id, 30).unwrap();

        assert_eq!(session.state.score, 1);
        assert_eq!(session.state.attempts, 1);
        assert!(session.state.matched.contains(&id));
        assert!(has_kind(&events, |k| matches!(k, GameEventKind::MatchCorrect { id: m } if *m == id)));
        assert!(has_kind(&events, |k| matches!(
            k,
            GameEventKind::Celebration { grand: false, .. }
        )));
        assert_eq!(
            session.state.timers.clear_selections_at,
            Some(30 + CLEAR_AFTER_CORRECT_MS)
        );
    }

    #[test]
    fn test_incorrect_match_flags_for_three_seconds() {
        let mut session = battles_session();

        session.select(0, RecordId(1), 0).unwrap();
        session.select(1, RecordId(2), 0).unwrap();
        let events = session.select(2, RecordId(3), 100).unwrap();

        assert_eq!(session.state.score, 0);
        assert_eq!(session.state.attempts, 1);
        assert!(has_kind(&events, |k| matches!(k, GameEventKind::MatchIncorrect { .. })));
        assert_eq!(session.state.incorrect.len(), 3);
        assert_eq!(
            session.state.timers.clear_incorrect_at,
            Some(100 + INCORRECT_FLAG_MS)
        );
        assert_eq!(
            session.state.timers.clear_selections_at,
            Some(100 + CLEAR_AFTER_INCORRECT_MS)
        );

        // Nothing due before the deadline.
        assert!(session.poll(100 + INCORRECT_FLAG_MS - 1).is_empty());

        let due = session.poll(100 + INCORRECT_FLAG_MS);
        assert!(has_kind(&due, |k| matches!(k, GameEventKind::IncorrectCleared)));
        assert!(has_kind(&due, |k| matches!(k, GameEventKind::SelectionsCleared)));
        assert!(session.state.incorrect.is_empty());
        assert!(session.state.selections.iter().all(Option::is_none));
    }

    #[test]
    fn test_selection_replaces_prior_in_same_column() {
        let mut session = battles_session();
        session.select(0, RecordId(1), 0).unwrap();
        session.select(0, RecordId(2), 5).unwrap();
        assert_eq!(session.state.selections[0], Some(RecordId(2)));
        assert_eq!(session.state.attempts, 0);
    }

    #[test]
    fn test_matched_item_click_is_noop() {
        let mut session = battles_session();
        let id = RecordId(10);
        session.select(0, id, 0).unwrap();
        session.select(1, id, 0).unwrap();
        session.select(2, id, 0).unwrap();
        assert_eq!(session.state.score, 1);

        let events = session.select(0, id, 50).unwrap();
        assert!(events.is_empty());
        assert_eq!(session.state.score, 1);
        assert_eq!(session.state.attempts, 1);
    }

    #[test]
    fn test_new_selection_supersedes_pending_clear() {
        let mut session = battles_session();
        let id = RecordId(10);
        session.select(0, id, 0).unwrap();
        session.select(1, id, 0).unwrap();
        session.select(2, id, 0).unwrap();

        // Click again before the 1000 ms clear fires: the pending clear is
        // finalized first, then the new selection lands alone.
        let events = session.select(0, RecordId(11), 500).unwrap();
        assert!(has_kind(&events, |k| matches!(k, GameEventKind::SelectionsCleared)));
        assert_eq!(session.state.selections[0], Some(RecordId(11)));
        assert_eq!(session.state.selections[1], None);
        assert_eq!(session.state.timers.clear_selections_at, None);
    }

    #[test]
    fn test_completion_fires_once_with_grand_celebration() {
        let spec = catalog::find_game("foods").unwrap();
        let filters = vec![("nation".to_string(), "Scotland".to_string())];
        let mut session = GameSession::with_seed(spec, &filters, 7, 0).unwrap();
        assert_eq!(session.state.active.len(), 2);

        let mut now = 0;
        for id in [RecordId(3), RecordId(4)] {
            now += 2000;
            session.poll(now);
            session.select(0, id, now).unwrap();
            session.select(1, id, now).unwrap();
        }

        assert!(session.is_complete());
        assert_eq!(session.state.score, 2);
        assert_eq!(session.state.timers.grand_celebration_at, Some(now + GRAND_CELEBRATION_MS));

        let due = session.poll(now + GRAND_CELEBRATION_MS);
        assert!(has_kind(&due, |k| matches!(
            k,
            GameEventKind::Celebration { grand: true, .. }
        )));

        // Exactly one completion event in the whole log.
        let completions = session
            .state
            .event_log
            .get_recent(usize::MAX)
            .iter()
            .filter(|e| matches!(e.kind, GameEventKind::GameComplete))
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_filter_change_reinitializes() {
        let mut session = battles_session();
        let id = RecordId(10);
        session.select(0, id, 0).unwrap();
        session.select(1, id, 0).unwrap();
        session.select(2, id, 0).unwrap();
        assert_eq!(session.state.score, 1);

        let filters = vec![("theatre".to_string(), "Naval".to_string())];
        session.set_filters(&filters, 5000).unwrap();

        assert_eq!(session.state.active.len(), 3);
        assert_eq!(session.state.score, 0);
        assert_eq!(session.state.attempts, 0);
        assert!(session.state.matched.is_empty());
        assert!(!session.state.timers.any_pending());

        // Active set is a subset of the full dataset.
        for id in &session.state.active {
            assert!(session.spec.record(*id).is_some());
        }
    }

    #[test]
    fn test_two_filters_compose() {
        let spec = catalog::find_game("battles").unwrap();
        let filters = vec![
            ("era".to_string(), "Twentieth Century".to_string()),
            ("theatre".to_string(), "Naval".to_string()),
        ];
        let session = GameSession::with_seed(spec, &filters, 1, 0).unwrap();
        assert_eq!(session.state.active, vec![RecordId(15)]);
    }

    #[test]
    fn test_unknown_filter_is_rejected() {
        let spec = catalog::find_game("battles").unwrap();
        let filters = vec![("era".to_string(), "Space Age".to_string())];
        let err = GameSession::with_seed(spec, &filters, 1, 0).unwrap_err();
        assert!(matches!(err, EngineError::UnknownFilter { .. }));
    }

    #[test]
    fn test_selecting_filtered_out_record_is_rejected() {
        let spec = catalog::find_game("battles").unwrap();
        let filters = vec![("theatre".to_string(), "Naval".to_string())];
        let mut session = GameSession::with_seed(spec, &filters, 1, 0).unwrap();
        // Hastings is a land battle, outside the active set.
        let err = session.select(0, RecordId(1), 0).unwrap_err();
        assert!(matches!(err, EngineError::RecordNotActive { .. }));
    }

    #[test]
    fn test_accuracy_tracks_documented_scenario() {
        // spec scenario: one correct triple then one mismatched triple.
        let mut session = battles_session();
        let id = RecordId(10);
        session.select(0, id, 0).unwrap();
        session.select(1, id, 0).unwrap();
        session.select(2, id, 0).unwrap();

        session.poll(2000); // selections cleared
        session.select(0, RecordId(1), 2000).unwrap();
        session.select(1, RecordId(2), 2000).unwrap();
        session.select(2, RecordId(3), 2000).unwrap();

        assert_eq!(session.state.score, 1);
        assert_eq!(session.state.attempts, 2);
        let stats = stats::session_stats(&session);
        assert_eq!(stats.accuracy, 50);
    }

    #[test]
    fn test_reset_reshuffles_and_clears() {
        let mut session = battles_session();
        let before = session.state.column_order.clone();
        session.select(0, RecordId(10), 0).unwrap();
        session.reset(100);

        assert_eq!(session.state.score, 0);
        assert!(session.state.selections.iter().all(Option::is_none));
        // 21! orderings; a repeat from the continuing rng stream is as good as impossible.
        assert_ne!(session.state.column_order, before);
    }
}
