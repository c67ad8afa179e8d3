//! Feedback timer processing
//!
//! Collect the deadlines that have come due, then apply their transitions.
//! Driven by `GameSession::poll`, either from API calls or the background
//! feedback runner.

use crate::events::{GameEvent, GameEventKind};
use crate::records::GameSpec;
use crate::session::SessionState;

pub fn feedback_system(
    state: &mut SessionState,
    spec: &GameSpec,
    now_ms: u64,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if due(state.timers.clear_incorrect_at, now_ms) {
        state.timers.clear_incorrect_at = None;
        state.incorrect.clear();
        events.push(state.emit(now_ms, GameEventKind::IncorrectCleared));
    }

    if due(state.timers.clear_selections_at, now_ms) {
        state.timers.clear_selections_at = None;
        state.selections.iter_mut().for_each(|s| *s = None);
        events.push(state.emit(now_ms, GameEventKind::SelectionsCleared));
    }

    if due(state.timers.grand_celebration_at, now_ms) {
        state.timers.grand_celebration_at = None;
        events.push(state.emit(
            now_ms,
            GameEventKind::Celebration { theme: spec.theme, grand: true },
        ));
    }

    events
}

fn due(deadline: Option<u64>, now_ms: u64) -> bool {
    deadline.is_some_and(|at| at <= now_ms)
}
