//! Selection state machine
//!
//! At most one selected record per column. Selecting into a column replaces
//! that column's prior selection; matched records are inert. There is no
//! explicit deselect - selections are cleared by feedback timers.

use crate::error::EngineError;
use crate::events::{GameEvent, GameEventKind};
use crate::records::{GameSpec, RecordId};
use crate::session::SessionState;
use crate::systems::evaluation;

pub fn selection_system(
    state: &mut SessionState,
    spec: &GameSpec,
    column: usize,
    id: RecordId,
    now_ms: u64,
) -> Result<Vec<GameEvent>, EngineError> {
    if column >= spec.columns.len() {
        return Err(EngineError::ColumnOutOfRange {
            column,
            columns: spec.columns.len(),
        });
    }
    if !state.active.contains(&id) {
        return Err(EngineError::RecordNotActive { id });
    }

    // Matched records are permanently out of play.
    if state.matched.contains(&id) {
        return Ok(Vec::new());
    }

    let mut events = Vec::new();

    // A fresh click supersedes a pending selection-clear: finalize it now so
    // the new attempt starts from a clean slate.
    if state.timers.clear_selections_at.is_some() {
        state.timers.clear_selections_at = None;
        state.selections.iter_mut().for_each(|s| *s = None);
        events.push(state.emit(now_ms, GameEventKind::SelectionsCleared));
    }

    state.selections[column] = Some(id);
    events.push(state.emit(now_ms, GameEventKind::ItemSelected { column, id }));

    if state.selections.iter().all(Option::is_some) {
        events.extend(evaluation::evaluation_system(state, spec, now_ms));
    }

    Ok(events)
}
