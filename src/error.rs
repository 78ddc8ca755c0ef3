//! Precondition violations raised by the lineup searches.

use thiserror::Error;

use crate::player::{Player, Side};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("duplicate player {0}")]
    DuplicatePlayer(Player),

    #[error("players {0} and {1} are on different sides")]
    MixedSides(Player, Player),

    #[error("expected a player on the {expected} side, got {player}")]
    WrongSide { player: Player, expected: Side },

    #[error("lineup lengths do not match: {team} != {opponents}")]
    LengthMismatch { team: usize, opponents: usize },

    #[error("lineup of {0} is too short to form pairs")]
    LineupTooShort(usize),

    #[error("roster size {size} is invalid for a pool of {pool}")]
    RosterSize { size: usize, pool: usize },

    #[error("{len}! permutations exceed the search limit of {max_len}!")]
    SearchTooLarge { len: usize, max_len: usize },

    #[error("invalid search config: {0}")]
    Config(String),
}
