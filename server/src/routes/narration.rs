use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::narration::cache::CacheStats;
use crate::narration::voices::VoiceSpec;
use crate::narration::NarrationResult;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NarrateRequest {
    pub text: String,
    pub voice: String,
}

#[derive(Deserialize)]
pub struct NarrateMultipleRequest {
    pub texts: Vec<String>,
    pub voice: String,
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub voice: String,
}

pub async fn list_voices(State(state): State<AppState>) -> Json<&'static [VoiceSpec]> {
    Json(state.narration.voices())
}

pub async fn narrate(
    State(state): State<AppState>,
    Json(req): Json<NarrateRequest>,
) -> Result<Json<NarrationResult>, ApiError> {
    let result = state.narration.narrate(&req.voice, &req.text).await?;
    Ok(Json(result))
}

pub async fn narrate_multiple(
    State(state): State<AppState>,
    Json(req): Json<NarrateMultipleRequest>,
) -> Result<Json<Vec<NarrationResult>>, ApiError> {
    let results = state.narration.narrate_multiple(&req.voice, &req.texts).await?;
    Ok(Json(results))
}

pub async fn preview_voice(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<NarrationResult>, ApiError> {
    let result = state.narration.preview_voice(&req.voice).await?;
    Ok(Json(result))
}

pub async fn cache_stats(State(state): State<AppState>) -> Result<Json<CacheStats>, ApiError> {
    Ok(Json(state.narration.cache_stats()?))
}

pub async fn clear_cache(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let removed = state.narration.clear_cache()?;
    Ok(Json(serde_json::json!({ "removed": removed })))
}
