//! Match recorder.
//!
//! Applies a match outcome as a single transaction: one append-only match
//! row plus one counter increment on each player row. Both player rows get
//! the same `updated` timestamp, captured once per call.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use matchboard_core::{MatchOutcome, OutcomeError, StatDelta};

use super::players::DbError;

/// A successfully recorded match.
#[derive(Debug, Clone)]
pub struct RecordedMatch {
    pub match_id: i32,
    pub player1_id: i32,
    pub player2_id: i32,
    pub match_result: i16,
    pub updated: DateTime<Utc>,
}

/// Recorder failure, mapped to distinct HTTP statuses by the facade.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Invalid(#[from] OutcomeError),

    #[error("player {0} does not exist")]
    UnknownPlayer(i32),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Match repository
pub struct MatchRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record one match outcome.
    ///
    /// Not idempotent: the same payload twice appends two match rows and
    /// doubles the counter increments. All three writes commit or roll back
    /// together.
    pub async fn record(&self, outcome: MatchOutcome) -> Result<RecordedMatch, RecordError> {
        let result = outcome.validate()?;
        let update_ts = Utc::now();

        let mut tx = self.pool.begin().await?;

        for id in [outcome.player1_id, outcome.player2_id] {
            let exists: Option<(i32,)> =
                sqlx::query_as("SELECT player_id FROM players WHERE player_id = $1")
                    .bind(id)
                    .fetch_optional(&mut *tx)
                    .await?;
            if exists.is_none() {
                return Err(RecordError::UnknownPlayer(id));
            }
        }

        let (match_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO matches (player1_id, player2_id, match_result)
            VALUES ($1, $2, $3)
            RETURNING match_id
            "#,
        )
        .bind(outcome.player1_id)
        .bind(outcome.player2_id)
        .bind(result.code())
        .fetch_one(&mut *tx)
        .await?;

        bump_counter(&mut tx, outcome.player1_id, result.player1_delta(), update_ts).await?;
        bump_counter(&mut tx, outcome.player2_id, result.player2_delta(), update_ts).await?;

        tx.commit().await?;

        tracing::debug!(
            match_id,
            player1 = outcome.player1_id,
            player2 = outcome.player2_id,
            result = result.code(),
            "match recorded"
        );

        Ok(RecordedMatch {
            match_id,
            player1_id: outcome.player1_id,
            player2_id: outcome.player2_id,
            match_result: result.code(),
            updated: update_ts,
        })
    }

    /// Number of rows in the match log. Test and diagnostic support.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM matches")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

/// Increment exactly one counter on a player row, stamping `updated`.
async fn bump_counter(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    player_id: i32,
    delta: StatDelta,
    update_ts: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    let column = match delta {
        StatDelta::Won => "matches_won",
        StatDelta::Lost => "matches_lost",
        StatDelta::Tied => "matches_tied",
    };

    // Column name comes from the enum above, never from input.
    let sql =
        format!("UPDATE players SET {column} = {column} + 1, updated = $1 WHERE player_id = $2");

    sqlx::query(&sql)
        .bind(update_ts)
        .bind(player_id)
        .execute(&mut **tx)
        .await?;

    Ok(())
}
