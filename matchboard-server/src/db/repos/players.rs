//! Player repository.
//!
//! Reads feed the leaderboard and the per-player stat endpoint; the only
//! writes are conflict-skipping name inserts used by seeding. Counter
//! updates happen exclusively in the match recorder.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Full player record, as served by `GET /players/{id}`.
#[derive(Debug, Clone, FromRow)]
pub struct PlayerRow {
    pub player_id: i32,
    pub player_name: String,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
    pub matches_won: i32,
    pub matches_lost: i32,
    pub matches_tied: i32,
    pub matches_played: i32,
    pub score: i32,
}

/// Leaderboard line: name plus the stat fields, ranked by score.
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRow {
    pub player_name: String,
    pub score: i32,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_tied: i32,
    pub matches_lost: i32,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Player repository
pub struct PlayerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Top players by score, descending. Tie order is left to the database.
    pub async fn top_players(&self, limit: i64) -> Result<Vec<LeaderboardRow>, DbError> {
        let rows = sqlx::query_as(
            r#"
            SELECT player_name, score, matches_played, matches_won, matches_tied, matches_lost
            FROM players
            ORDER BY score DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// All player ids. Load-harness support; unbounded by design.
    pub async fn list_ids(&self) -> Result<Vec<i32>, DbError> {
        let ids: Vec<(i32,)> = sqlx::query_as("SELECT player_id FROM players ORDER BY player_id")
            .fetch_all(self.pool)
            .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    /// Fetch one player's full stat row.
    pub async fn get(&self, player_id: i32) -> Result<PlayerRow, DbError> {
        sqlx::query_as(
            r#"
            SELECT player_id, player_name, created, updated,
                   matches_won, matches_lost, matches_tied, matches_played, score
            FROM players
            WHERE player_id = $1
            "#,
        )
        .bind(player_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "player",
            id: player_id.to_string(),
        })
    }

    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM players")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Insert a player by name, skipping on name collision.
    ///
    /// Returns whether a row was actually inserted.
    pub async fn insert_name(&self, name: &str) -> Result<bool, DbError> {
        let result = sqlx::query(
            "INSERT INTO players (player_name) VALUES ($1) ON CONFLICT (player_name) DO NOTHING",
        )
        .bind(name)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
