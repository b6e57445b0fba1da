//! Player endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{PlayerRepo, PlayerRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Player stat response
#[derive(Serialize)]
pub struct PlayerResponse {
    pub player_name: String,
    pub score: i32,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_tied: i32,
    pub matches_lost: i32,
    pub created: String,
    pub updated: Option<String>,
}

impl From<PlayerRow> for PlayerResponse {
    fn from(p: PlayerRow) -> Self {
        Self {
            player_name: p.player_name,
            score: p.score,
            matches_played: p.matches_played,
            matches_won: p.matches_won,
            matches_tied: p.matches_tied,
            matches_lost: p.matches_lost,
            created: p.created.to_rfc3339(),
            updated: p.updated.map(|ts| ts.to_rfc3339()),
        }
    }
}

/// GET /players - all player ids, for the load harness
async fn list_players(State(state): State<Arc<AppState>>) -> Result<Json<Vec<i32>>, ApiError> {
    let ids = PlayerRepo::new(&state.pool).list_ids().await?;
    Ok(Json(ids))
}

/// GET /players/{player_id} - one player's full stat row
async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i32>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = PlayerRepo::new(&state.pool).get(player_id).await?;
    Ok(Json(PlayerResponse::from(player)))
}

/// Player routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/players", get(list_players))
        .route("/players/{player_id}", get(get_player))
}
