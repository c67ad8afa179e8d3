use axum::extract::Path;
use axum::Json;

use engine::catalog;

use crate::error::ApiError;
use crate::state::{game_detail, game_summary, GameDetail, GameSummary};

pub async fn list_games() -> Json<Vec<GameSummary>> {
    Json(catalog::all_games().iter().copied().map(game_summary).collect())
}

pub async fn get_game(Path(key): Path<String>) -> Result<Json<GameDetail>, ApiError> {
    let spec = catalog::find_game(&key)
        .ok_or_else(|| ApiError::not_found(format!("unknown game '{key}'")))?;
    Ok(Json(game_detail(spec)))
}
