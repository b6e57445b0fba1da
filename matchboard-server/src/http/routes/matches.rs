//! Match recording endpoint

use std::sync::Arc;

use axum::{extract::State, routing::put, Json, Router};
use serde::Deserialize;

use matchboard_core::MatchOutcome;

use crate::db::repos::MatchRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// PUT /match request body
#[derive(Deserialize)]
pub struct MatchRequest {
    pub player1_id: i32,
    pub player2_id: i32,
    pub match_result: i16,
}

/// PUT /match - record a match outcome
///
/// Returns a plain-text confirmation on success; validation failures are
/// 400, unknown players 404, transaction failures 500.
async fn record_match(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MatchRequest>,
) -> Result<String, ApiError> {
    let recorded = MatchRepo::new(&state.pool)
        .record(MatchOutcome {
            player1_id: req.player1_id,
            player2_id: req.player2_id,
            match_result: req.match_result,
        })
        .await?;

    Ok(format!(
        "Updated player stats for '{}' v '{}' at time {}!",
        recorded.player1_id, recorded.player2_id, recorded.updated
    ))
}

/// Match routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/match", put(record_match))
}
