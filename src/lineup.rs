//! Exhaustive lineup searches over a round-robin doubles tie.
//!
//! A lineup is a cyclic order of players: round `i` of the tie is contested by the players at
//! positions `i` and `i + 1` (wrapping around to the first player after the last), so a lineup
//! of `L` players yields `L` pairs. Both sides field their pairs this way, and the tie is
//! scored by summing the [NetScoreMatrix] over its rounds.

use tracing::debug;

use crate::comb::{arrange, Permuter};
use crate::config::SearchConfig;
use crate::display::DisplaySlice;
use crate::error::InvalidInput;
use crate::matrix::NetScoreMatrix;
use crate::player::{check_pool, Pair, Player, Side};
use crate::strength::PairStrength;


/// One round of a tie: which pair meets which, and the expected net score.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    /// One-based round number.
    pub number: usize,
    pub team: Pair,
    pub opponents: Pair,
    pub net_score: f64,
}

/// The best lineup found by a search, with its objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimum {
    pub lineup: Vec<Player>,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Minimax {
    /// Representative opponent lineups that minimise the score of the planned
    /// lineup, in enumeration order.
    pub counters: Vec<Vec<Player>>,

    /// The score of the planned lineup against each of the `counters`.
    pub counter_score: f64,

    /// How many opponent lineups tie for `counter_score`; at least `counters.len()`.
    pub tied_counters: usize,

    /// Our reordered lineup and its guaranteed score (floor) against every counter.
    pub optimum: Optimum,
}

/// The pairs fielded by `lineup` over the rounds of a tie.
pub fn rotation(lineup: &[Player]) -> Result<Vec<Pair>, InvalidInput> {
    let len = lineup.len();
    if len < 2 {
        return Err(InvalidInput::LineupTooShort(len));
    }
    (0..len)
        .map(|index| Pair::new(lineup[index], lineup[(index + 1) % len]))
        .collect()
}

fn check_lengths(team: &[Player], opponents: &[Player]) -> Result<usize, InvalidInput> {
    if team.len() != opponents.len() {
        return Err(InvalidInput::LengthMismatch {
            team: team.len(),
            opponents: opponents.len(),
        });
    }
    Ok(team.len())
}

#[inline]
fn score_rotations(team: &[Pair], opponents: &[Pair], matrix: &NetScoreMatrix) -> f64 {
    team.iter()
        .zip(opponents)
        .map(|(team, opponents)| matrix.get(team, opponents))
        .sum()
}

/// The round-by-round breakdown of `team` against `opponents`.
pub fn rounds(
    team: &[Player],
    opponents: &[Player],
    matrix: &NetScoreMatrix,
) -> Result<Vec<Round>, InvalidInput> {
    check_lengths(team, opponents)?;
    let (team, opponents) = (rotation(team)?, rotation(opponents)?);
    Ok(team
        .into_iter()
        .zip(opponents)
        .enumerate()
        .map(|(index, (team, opponents))| Round {
            number: index + 1,
            team,
            opponents,
            net_score: matrix.get(&team, &opponents),
        })
        .collect())
}

/// Total expected net score of `team` against `opponents` over all rounds of the tie.
pub fn schedule_score(
    team: &[Player],
    opponents: &[Player],
    matrix: &NetScoreMatrix,
) -> Result<f64, InvalidInput> {
    check_lengths(team, opponents)?;
    Ok(score_rotations(&rotation(team)?, &rotation(opponents)?, matrix))
}

/// Visits every ordering of `players` in lexicographic order of their positions and keeps the
/// first to attain the greatest `objective`.
fn maximise(
    players: &[Player],
    config: &SearchConfig,
    mut objective: impl FnMut(&[Player]) -> Result<f64, InvalidInput>,
) -> Result<Optimum, InvalidInput> {
    config.preflight(players.len())?;
    let mut candidate = players.to_vec();
    let mut best = Optimum {
        lineup: players.to_vec(),
        score: f64::NEG_INFINITY,
    };
    for ordinals in Permuter::new(players.len()) {
        arrange(players, &ordinals, &mut candidate);
        let score = objective(&candidate)?;
        if score > best.score {
            best.lineup.copy_from_slice(&candidate);
            best.score = score;
        }
    }
    Ok(best)
}

/// Orders `roster` to maximise the schedule score against a known opponent lineup.
pub fn optimise_against(
    roster: &[Player],
    opponents: &[Player],
    matrix: &NetScoreMatrix,
    config: &SearchConfig,
) -> Result<Optimum, InvalidInput> {
    config.validate()?;
    check_lengths(roster, opponents)?;
    config.preflight(roster.len())?;
    check_pool(roster, Side::Team)?;
    check_pool(opponents, Side::Opponent)?;

    let opponent_rotation = rotation(opponents)?;
    let optimum = maximise(roster, config, |lineup| {
        Ok(score_rotations(&rotation(lineup)?, &opponent_rotation, matrix))
    })?;
    debug!(
        "best of {} lineups against {}: {} scoring {:.6}",
        Permuter::new(roster.len()).count(),
        DisplaySlice::from(opponents),
        DisplaySlice::from(&*optimum.lineup),
        optimum.score
    );
    Ok(optimum)
}

/// Hardens `lineup` against an adversarial opponent.
///
/// The opponent is assumed to counter our planned `lineup` with whichever ordering of
/// `opponent_pool` minimises our score. Every ordering within [SearchConfig::tolerance] of
/// that minimum is a counter; the first [SearchConfig::adversaries] of them are retained. Our
/// players are then reordered to maximise the worst score across the retained counters.
pub fn minimax(
    lineup: &[Player],
    opponent_pool: &[Player],
    matrix: &NetScoreMatrix,
    config: &SearchConfig,
) -> Result<Minimax, InvalidInput> {
    config.validate()?;
    check_lengths(lineup, opponent_pool)?;
    config.preflight(lineup.len())?;
    check_pool(lineup, Side::Team)?;
    check_pool(opponent_pool, Side::Opponent)?;

    let planned_rotation = rotation(lineup)?;
    let mut responses = Vec::with_capacity(Permuter::new(opponent_pool.len()).count() as usize);
    let mut response = opponent_pool.to_vec();
    for ordinals in Permuter::new(opponent_pool.len()) {
        arrange(opponent_pool, &ordinals, &mut response);
        let response_rotation = rotation(&response)?;
        let score = score_rotations(&planned_rotation, &response_rotation, matrix);
        responses.push((response.clone(), response_rotation, score));
    }
    let counter_score = responses
        .iter()
        .map(|(_, _, score)| *score)
        .fold(f64::INFINITY, f64::min);
    let is_counter = |score: f64| (score - counter_score).abs() <= config.tolerance;
    let tied_counters = responses
        .iter()
        .filter(|(_, _, score)| is_counter(*score))
        .count();
    let (counters, counter_rotations): (Vec<_>, Vec<_>) = responses
        .into_iter()
        .filter(|(_, _, score)| is_counter(*score))
        .take(config.adversaries)
        .map(|(response, response_rotation, _)| (response, response_rotation))
        .unzip();
    debug!(
        "{tied_counters} counter(s) to {} scoring {counter_score:.6}, retained {}",
        DisplaySlice::from(lineup),
        counters.len()
    );

    let optimum = maximise(lineup, config, |candidate| {
        let candidate_rotation = rotation(candidate)?;
        Ok(counter_rotations
            .iter()
            .map(|counter_rotation| score_rotations(&candidate_rotation, counter_rotation, matrix))
            .fold(f64::INFINITY, f64::min))
    })?;
    debug!(
        "maximin lineup {} with floor {:.6}",
        DisplaySlice::from(&*optimum.lineup),
        optimum.score
    );

    Ok(Minimax {
        counters,
        counter_score,
        tied_counters,
        optimum,
    })
}

/// Orders `roster` to maximise the summed intrinsic strength of the pairs it fields, for when
/// the opponent's lineup is unknown.
pub fn order_by_strength(
    roster: &[Player],
    strength: &PairStrength,
    config: &SearchConfig,
) -> Result<Optimum, InvalidInput> {
    config.validate()?;
    config.preflight(roster.len())?;
    check_pool(roster, Side::Team)?;
    if roster.len() < 2 {
        return Err(InvalidInput::LineupTooShort(roster.len()));
    }

    let optimum = maximise(roster, config, |lineup| {
        Ok(rotation(lineup)?
            .iter()
            .map(|pair| strength.get(pair))
            .sum())
    })?;
    debug!(
        "strongest ordering {} with strength {:.6}",
        DisplaySlice::from(&*optimum.lineup),
        optimum.score
    );
    Ok(optimum)
}
