//! Reduction of a confrontation's game history to a single expected net score.

use crate::history::MatchResult;

/// Magnitude of the net score scale; a net score lies in `[-SCALE, SCALE]`.
pub const SCALE: f64 = 10.0;

/// The expected net score of a confrontation, from the aggregate share of points won across
/// all its `games`. A 10-point game is assumed: winning share `W` of all points maps to
/// `2 * (10 * W) - 10`, so that 0 is even and ±10 is total domination either way.
///
/// With no games, or no points scored in any of them, the confrontation is taken as even.
pub fn net_score(games: &[MatchResult]) -> f64 {
    let (own, opponent) = games
        .iter()
        .fold((0u64, 0u64), |(own, opponent), game| {
            (own + game.0 as u64, opponent + game.1 as u64)
        });
    let total = own + opponent;
    if total == 0 {
        return 0.0;
    }

    let win_share = own as f64 / total as f64;
    2.0 * (SCALE * win_share) - SCALE
}
