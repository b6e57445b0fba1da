//! Derived player stats.
//!
//! The database stores these as generated columns so they can never drift
//! from the counters; these helpers are the same functions on the Rust side,
//! used for display and for checking invariants in tests.

/// Ranking score: 2 points per win, 1 per tie, 0 per loss.
pub fn score(matches_won: i32, matches_tied: i32) -> i32 {
    matches_won * 2 + matches_tied
}

/// Total matches a player has taken part in.
pub fn matches_played(matches_won: i32, matches_lost: i32, matches_tied: i32) -> i32 {
    matches_won + matches_lost + matches_tied
}
