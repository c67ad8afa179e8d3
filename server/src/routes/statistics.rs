use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use engine::AggregateStats;

use crate::state::{AppState, EventView};

#[derive(Deserialize)]
pub struct RecentQuery {
    pub count: Option<u32>,
}

pub async fn get_aggregate_stats(State(state): State<AppState>) -> Json<AggregateStats> {
    let registry = state.registry.lock().unwrap();
    Json(registry.aggregate_stats())
}

pub async fn get_recent_events(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Json<Vec<EventView>> {
    let registry = state.registry.lock().unwrap();
    let events = registry
        .recent_events(query.count.unwrap_or(100) as usize)
        .into_iter()
        .map(|(id, event)| EventView { session: id.0, event })
        .collect();
    Json(events)
}

pub async fn get_event_count(State(state): State<AppState>) -> Json<serde_json::Value> {
    let registry = state.registry.lock().unwrap();
    Json(serde_json::json!({ "count": registry.event_count() }))
}
