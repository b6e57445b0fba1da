//! Schema creation and roster seeding.
//!
//! Idempotent: tables and indexes use IF NOT EXISTS, and the roster is only
//! inserted when the players table is empty. Runs once at startup, before
//! the server accepts connections.

use sqlx::PgPool;

use matchboard_core::roster::SEED_ROSTER;

use super::repos::{DbError, PlayerRepo};

/// Create the players and matches tables and seed the initial roster.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema migrations...");

    // matches_played and score are generated columns: they can never drift
    // from the counters and are never written directly.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            player_id SERIAL PRIMARY KEY,
            player_name TEXT NOT NULL UNIQUE,
            created TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated TIMESTAMPTZ,
            matches_won INTEGER NOT NULL DEFAULT 0,
            matches_lost INTEGER NOT NULL DEFAULT 0,
            matches_tied INTEGER NOT NULL DEFAULT 0,
            matches_played INTEGER GENERATED ALWAYS AS
                (matches_won + matches_lost + matches_tied) STORED,
            score INTEGER GENERATED ALWAYS AS
                (matches_won * 2 + matches_tied) STORED
        )
        "#,
    )
    .execute(pool)
    .await?;

    // match_result: 1 = player1 won, 2 = player2 won, 3 = tie
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS matches (
            match_id SERIAL PRIMARY KEY,
            player1_id INTEGER NOT NULL REFERENCES players (player_id),
            player2_id INTEGER NOT NULL REFERENCES players (player_id),
            match_result SMALLINT NOT NULL CHECK (match_result IN (1, 2, 3)),
            created TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Ordered audit queries over the match log
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_matches_created ON matches (created)")
        .execute(pool)
        .await?;

    seed_roster(pool).await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}

/// Insert the fixed roster iff the players table is empty.
///
/// Individual name collisions are skipped, not fatal, so a concurrent or
/// repeated run inserts zero additional rows.
async fn seed_roster(pool: &PgPool) -> Result<(), DbError> {
    let repo = PlayerRepo::new(pool);

    let existing = repo.count().await?;
    tracing::debug!(existing, "existing players");
    if existing > 0 {
        return Ok(());
    }

    tracing::info!("Seeding {} players", SEED_ROSTER.len());
    let mut inserted = 0u32;
    for name in SEED_ROSTER {
        if repo.insert_name(name).await? {
            inserted += 1;
        } else {
            tracing::warn!(name, "seed name already present, skipping");
        }
    }
    tracing::info!(inserted, "roster seeding complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Run with: DATABASE_URL=postgres://... cargo test -p matchboard-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");

        run(&pool).await.expect("first run");
        let count_after_first = PlayerRepo::new(&pool).count().await.expect("count");

        run(&pool).await.expect("second run");
        let count_after_second = PlayerRepo::new(&pool).count().await.expect("count");

        assert_eq!(count_after_first, count_after_second);
    }
}
