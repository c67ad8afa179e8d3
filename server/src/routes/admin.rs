use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct MemoryUsage {
    pub physical_mem: u64,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub live_sessions: u32,
    pub runner_active: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let live_sessions = state.registry.lock().unwrap().len() as u32;
    let runner_active = state
        .runner
        .lock()
        .unwrap()
        .as_ref()
        .map(|r| r.is_running())
        .unwrap_or(false);

    Json(Health {
        status: "ok",
        live_sessions,
        runner_active,
    })
}

pub async fn get_memory_usage() -> Json<MemoryUsage> {
    let physical = memory_stats::memory_stats()
        .map(|stats| stats.physical_mem as u64)
        .unwrap_or(0);

    Json(MemoryUsage {
        physical_mem: physical,
    })
}
