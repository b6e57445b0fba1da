//! Repository implementations for database access.
//!
//! Conventions:
//! - Conflicts handled via ON CONFLICT (no check-then-insert)
//! - Multi-row writes go through a single transaction
//! - NotFound is a typed error, not an empty result

pub mod matches;
pub mod players;

pub use matches::{MatchRepo, RecordError, RecordedMatch};
pub use players::{DbError, LeaderboardRow, PlayerRepo, PlayerRow};
