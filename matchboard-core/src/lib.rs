//! matchboard-core: domain logic for the matchboard leaderboard service
//!
//! Pure types shared by the server and the CLI tooling:
//! - Match result codes and their per-player counter effects
//! - Derived stat computation (score, matches played)
//! - The seed roster and synthetic player-name generation

pub mod result;
pub mod roster;
pub mod stats;

pub use result::{MatchOutcome, MatchResult, OutcomeError, StatDelta};
pub use stats::{matches_played, score};
