//! Match result codes and their effect on player counters.
//!
//! The wire format uses a small integer: 1 = player1 won, 2 = player2 won,
//! 3 = tie. Anything else is rejected at the boundary; the database check
//! constraint enforces the same set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a 1v1 match, as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub player1_id: i32,
    pub player2_id: i32,
    pub match_result: i16,
}

/// Validation error for a match payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("invalid match_result {0}: must be 1 (player1 won), 2 (player2 won) or 3 (tie)")]
    InvalidResult(i16),

    #[error("player {0} cannot play against themselves")]
    SamePlayer(i32),
}

/// A validated match result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    PlayerOneWin,
    PlayerTwoWin,
    Tie,
}

/// Which counter a recorded match bumps on a player row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatDelta {
    Won,
    Lost,
    Tied,
}

impl MatchResult {
    /// Parse a wire result code, rejecting anything outside {1,2,3}.
    pub fn from_code(code: i16) -> Result<Self, OutcomeError> {
        match code {
            1 => Ok(Self::PlayerOneWin),
            2 => Ok(Self::PlayerTwoWin),
            3 => Ok(Self::Tie),
            other => Err(OutcomeError::InvalidResult(other)),
        }
    }

    pub fn code(self) -> i16 {
        match self {
            Self::PlayerOneWin => 1,
            Self::PlayerTwoWin => 2,
            Self::Tie => 3,
        }
    }

    /// Counter bumped on the player1 row.
    pub fn player1_delta(self) -> StatDelta {
        match self {
            Self::PlayerOneWin => StatDelta::Won,
            Self::PlayerTwoWin => StatDelta::Lost,
            Self::Tie => StatDelta::Tied,
        }
    }

    /// Counter bumped on the player2 row.
    pub fn player2_delta(self) -> StatDelta {
        match self {
            Self::PlayerOneWin => StatDelta::Lost,
            Self::PlayerTwoWin => StatDelta::Won,
            Self::Tie => StatDelta::Tied,
        }
    }
}

impl MatchOutcome {
    /// Validate the payload shape: a known result code and two distinct
    /// players. Existence of the ids is the recorder's job.
    pub fn validate(&self) -> Result<MatchResult, OutcomeError> {
        if self.player1_id == self.player2_id {
            return Err(OutcomeError::SamePlayer(self.player1_id));
        }
        MatchResult::from_code(self.match_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_codes_round_trip() {
        for code in 1..=3 {
            assert_eq!(MatchResult::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        for code in [0, 4, -1, 99] {
            assert_eq!(
                MatchResult::from_code(code),
                Err(OutcomeError::InvalidResult(code))
            );
        }
    }

    #[test]
    fn player1_win_maps_to_won_lost() {
        let result = MatchResult::PlayerOneWin;
        assert_eq!(result.player1_delta(), StatDelta::Won);
        assert_eq!(result.player2_delta(), StatDelta::Lost);
    }

    #[test]
    fn player2_win_maps_to_lost_won() {
        let result = MatchResult::PlayerTwoWin;
        assert_eq!(result.player1_delta(), StatDelta::Lost);
        assert_eq!(result.player2_delta(), StatDelta::Won);
    }

    #[test]
    fn tie_maps_to_tied_both_sides() {
        let result = MatchResult::Tie;
        assert_eq!(result.player1_delta(), StatDelta::Tied);
        assert_eq!(result.player2_delta(), StatDelta::Tied);
    }

    #[test]
    fn self_match_rejected() {
        let outcome = MatchOutcome {
            player1_id: 7,
            player2_id: 7,
            match_result: 1,
        };
        assert_eq!(outcome.validate(), Err(OutcomeError::SamePlayer(7)));
    }

    #[test]
    fn valid_outcome_passes() {
        let outcome = MatchOutcome {
            player1_id: 1,
            player2_id: 2,
            match_result: 3,
        };
        assert_eq!(outcome.validate(), Ok(MatchResult::Tie));
    }
}
