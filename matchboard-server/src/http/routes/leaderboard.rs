//! Leaderboard page

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::db::repos::PlayerRepo;
use crate::http::error::ApiError;
use crate::http::render;
use crate::http::server::AppState;

/// Rows shown on the leaderboard page.
const LEADERBOARD_LIMIT: i64 = 10;

/// GET / - ranked top-10 leaderboard as HTML
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let rows = PlayerRepo::new(&state.pool)
        .top_players(LEADERBOARD_LIMIT)
        .await?;

    Ok(Html(render::leaderboard_page(&rows)))
}

/// Leaderboard routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
