use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use engine::records::{GameSpec, RecordId};
use engine::registry::{SessionId, SessionRegistry};
use engine::runner::FeedbackRunner;
use engine::session::GameSession;
use engine::theme::{facet_color, CelebrationTheme};
use engine::{session_stats, GameEvent};

use crate::config::ServerConfig;
use crate::narration::NarrationService;

/// Global application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Mutex<SessionRegistry>>,
    pub runner: Arc<Mutex<Option<FeedbackRunner>>>,
    pub narration: Arc<NarrationService>,
    pub config: Arc<ServerConfig>,
}

// -- Serializable types returned by handlers --

#[derive(Serialize, Clone)]
pub struct GameSummary {
    pub key: &'static str,
    pub title: &'static str,
    pub theme: CelebrationTheme,
    pub accent: &'static str,
    pub columns: Vec<ColumnView>,
    pub record_count: u32,
}

#[derive(Serialize, Clone)]
pub struct GameDetail {
    #[serde(flatten)]
    pub summary: GameSummary,
    pub filters: Vec<FilterView>,
}

#[derive(Serialize, Clone)]
pub struct ColumnView {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Serialize, Clone)]
pub struct FilterView {
    pub key: &'static str,
    pub label: &'static str,
    pub values: Vec<FilterValueView>,
}

#[derive(Serialize, Clone)]
pub struct FilterValueView {
    pub value: &'static str,
    pub color: &'static str,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FilterPair {
    pub key: String,
    pub value: String,
}

#[derive(Serialize, Clone)]
pub struct ItemView {
    pub id: RecordId,
    pub text: &'static str,
    pub matched: bool,
    pub selected: bool,
    pub incorrect: bool,
}

#[derive(Serialize, Clone)]
pub struct ColumnStateView {
    pub key: &'static str,
    pub label: &'static str,
    pub items: Vec<ItemView>,
}

#[derive(Serialize, Clone)]
pub struct SessionView {
    pub id: u64,
    pub game: &'static str,
    pub title: &'static str,
    pub theme: CelebrationTheme,
    pub filters: Vec<FilterPair>,
    pub columns: Vec<ColumnStateView>,
    pub score: u32,
    pub attempts: u32,
    pub accuracy: u32,
    pub matched: u32,
    pub remaining: u32,
    pub complete: bool,
}

#[derive(Serialize, Clone)]
pub struct EventView {
    pub session: u64,
    #[serde(flatten)]
    pub event: GameEvent,
}

pub fn game_summary(spec: &'static GameSpec) -> GameSummary {
    GameSummary {
        key: spec.key,
        title: spec.title,
        theme: spec.theme,
        accent: spec.theme.accent(),
        columns: spec
            .columns
            .iter()
            .map(|c| ColumnView { key: c.key, label: c.label })
            .collect(),
        record_count: spec.records.len() as u32,
    }
}

pub fn game_detail(spec: &'static GameSpec) -> GameDetail {
    GameDetail {
        summary: game_summary(spec),
        filters: spec
            .filters
            .iter()
            .map(|f| FilterView {
                key: f.key,
                label: f.label,
                values: f
                    .values
                    .iter()
                    .map(|v| FilterValueView { value: v, color: facet_color(f.key, v) })
                    .collect(),
            })
            .collect(),
    }
}

pub fn session_view(id: SessionId, session: &GameSession) -> SessionView {
    let spec = session.spec;
    let state = &session.state;
    let stats = session_stats(session);

    let columns = spec
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| ColumnStateView {
            key: column.key,
            label: column.label,
            items: state.column_order[idx]
                .iter()
                .map(|rid| {
                    // Column orders only ever hold ids from the game's dataset.
                    let record = spec.record(*rid).unwrap();
                    ItemView {
                        id: *rid,
                        text: record.facets[idx],
                        matched: state.matched.contains(rid),
                        selected: state.selections[idx] == Some(*rid),
                        incorrect: state.incorrect.contains(rid),
                    }
                })
                .collect(),
        })
        .collect();

    SessionView {
        id: id.0,
        game: spec.key,
        title: spec.title,
        theme: spec.theme,
        filters: state
            .filters
            .iter()
            .map(|(key, value)| FilterPair { key: key.clone(), value: value.clone() })
            .collect(),
        columns,
        score: stats.score,
        attempts: stats.attempts,
        accuracy: stats.accuracy,
        matched: stats.matched,
        remaining: stats.remaining,
        complete: stats.complete,
    }
}

pub fn filter_tuples(filters: &[FilterPair]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|f| (f.key.clone(), f.value.clone()))
        .collect()
}
