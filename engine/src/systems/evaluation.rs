//! Match evaluator
//!
//! Runs as soon as every column holds a selection. Feedback delays branch on
//! the outcome computed here: incorrect flags always show for the full
//! incorrect duration, correct selections clear on the short one.

use crate::events::{GameEvent, GameEventKind};
use crate::records::GameSpec;
use crate::session::SessionState;
use crate::timers::{
    CLEAR_AFTER_CORRECT_MS, CLEAR_AFTER_INCORRECT_MS, GRAND_CELEBRATION_MS, INCORRECT_FLAG_MS,
};

pub fn evaluation_system(
    state: &mut SessionState,
    spec: &GameSpec,
    now_ms: u64,
) -> Vec<GameEvent> {
    let selected: Vec<_> = state.selections.iter().flatten().copied().collect();
    debug_assert_eq!(selected.len(), spec.columns.len());

    state.attempts += 1;
    let mut events = Vec::new();

    let first = selected[0];
    if selected.iter().all(|id| *id == first) {
        state.matched.insert(first);
        state.score += 1;
        events.push(state.emit(now_ms, GameEventKind::MatchCorrect { id: first }));
        events.push(state.emit(
            now_ms,
            GameEventKind::Celebration { theme: spec.theme, grand: false },
        ));
        state.timers.clear_selections_at = Some(now_ms + CLEAR_AFTER_CORRECT_MS);

        if !state.active.is_empty() && state.matched.len() >= state.active.len() {
            state.complete = true;
            events.push(state.emit(now_ms, GameEventKind::GameComplete));
            state.timers.grand_celebration_at = Some(now_ms + GRAND_CELEBRATION_MS);
        }
    } else {
        let mut ids = selected;
        ids.sort_unstable();
        ids.dedup();
        state.incorrect = ids.iter().copied().collect();
        events.push(state.emit(now_ms, GameEventKind::MatchIncorrect { ids }));
        state.timers.clear_incorrect_at = Some(now_ms + INCORRECT_FLAG_MS);
        state.timers.clear_selections_at = Some(now_ms + CLEAR_AFTER_INCORRECT_MS);
    }

    events
}
