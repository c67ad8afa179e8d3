use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use engine::persistence;
use engine::records::RecordId;
use engine::registry::SessionId;
use engine::{session_stats, GameEvent, SessionStats};

use crate::error::ApiError;
use crate::state::{filter_tuples, session_view, AppState, FilterPair, SessionView};

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub game: String,
    #[serde(default)]
    pub filters: Vec<FilterPair>,
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct SelectRequest {
    pub column: usize,
    pub record: u16,
}

#[derive(Deserialize)]
pub struct FiltersRequest {
    #[serde(default)]
    pub filters: Vec<FilterPair>,
}

#[derive(Serialize)]
pub struct SelectResponse {
    pub events: Vec<GameEvent>,
    pub session: SessionView,
}

pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let mut registry = state.registry.lock().unwrap();
    let filters = filter_tuples(&req.filters);
    let id = registry.create_session(&req.game, &filters, req.seed)?;
    let session = registry.get(id).unwrap();
    Ok(Json(session_view(id, session)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SessionView>, ApiError> {
    let mut registry = state.registry.lock().unwrap();
    let now = registry.now_ms();
    let session_id = SessionId(id);
    let session = registry
        .get_mut(session_id)
        .ok_or_else(|| ApiError::session_not_found(id))?;
    session.poll(now);
    Ok(Json(session_view(session_id, session)))
}

pub async fn select(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, ApiError> {
    let mut registry = state.registry.lock().unwrap();
    let now = registry.now_ms();
    let session_id = SessionId(id);
    let session = registry
        .get_mut(session_id)
        .ok_or_else(|| ApiError::session_not_found(id))?;

    let mut events = session.poll(now);
    events.extend(session.select(req.column, RecordId(req.record), now)?);

    Ok(Json(SelectResponse {
        events,
        session: session_view(session_id, session),
    }))
}

pub async fn set_filters(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<FiltersRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let mut registry = state.registry.lock().unwrap();
    let now = registry.now_ms();
    let session_id = SessionId(id);
    let session = registry
        .get_mut(session_id)
        .ok_or_else(|| ApiError::session_not_found(id))?;
    session.set_filters(&filter_tuples(&req.filters), now)?;
    Ok(Json(session_view(session_id, session)))
}

pub async fn reset(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SessionView>, ApiError> {
    let mut registry = state.registry.lock().unwrap();
    let now = registry.now_ms();
    let session_id = SessionId(id);
    let session = registry
        .get_mut(session_id)
        .ok_or_else(|| ApiError::session_not_found(id))?;
    session.reset(now);
    Ok(Json(session_view(session_id, session)))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut registry = state.registry.lock().unwrap();
    registry
        .remove(SessionId(id))
        .ok_or_else(|| ApiError::session_not_found(id))?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SessionStats>, ApiError> {
    let registry = state.registry.lock().unwrap();
    let session = registry
        .get(SessionId(id))
        .ok_or_else(|| ApiError::session_not_found(id))?;
    Ok(Json(session_stats(session)))
}

pub async fn export_session(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let registry = state.registry.lock().unwrap();
    let session = registry
        .get(SessionId(id))
        .ok_or_else(|| ApiError::session_not_found(id))?;
    let json = persistence::export_session(session);
    let value = serde_json::from_str(&json)
        .map_err(|e| ApiError::internal("snapshot serialization failed", Some(e.to_string())))?;
    Ok(Json(value))
}

pub async fn import_session(
    State(state): State<AppState>,
    Json(snapshot): Json<serde_json::Value>,
) -> Result<Json<SessionView>, ApiError> {
    let session = persistence::import_session(&snapshot.to_string())?;
    let mut registry = state.registry.lock().unwrap();
    let id = registry.insert_session(session);
    let session = registry.get(id).unwrap();
    Ok(Json(session_view(id, session)))
}
