//! Selection of the strongest roster from a larger pool of players.

use tracing::debug;

use crate::comb::{arrange, Combinator};
use crate::display::DisplaySlice;
use crate::error::InvalidInput;
use crate::player::{check_pool, pairs_of, Player};
use crate::strength::PairStrength;

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    /// Chosen players, in pool order.
    pub players: Vec<Player>,

    /// Summed strength of every pair formable within the roster.
    pub strength: f64,
}

/// Summed strength over every pair formed from `players`.
pub fn total_strength(players: &[Player], strength: &PairStrength) -> Result<f64, InvalidInput> {
    Ok(pairs_of(players)?
        .iter()
        .map(|pair| strength.get(pair))
        .sum())
}

/// Exhaustively picks the `size`-subset of `pool` with the greatest [total_strength]. Subsets
/// are visited in lexicographic order of pool positions and the first to reach the maximum
/// is kept.
pub fn select(
    pool: &[Player],
    size: usize,
    strength: &PairStrength,
) -> Result<Roster, InvalidInput> {
    if size < 2 || size > pool.len() {
        return Err(InvalidInput::RosterSize {
            size,
            pool: pool.len(),
        });
    }
    if let Some(first) = pool.first() {
        check_pool(pool, first.side())?;
    }

    let combinator = Combinator::new(pool.len(), size);
    debug!(
        "selecting {size} of {} players ({} candidates)",
        pool.len(),
        combinator.count()
    );
    let mut candidate = vec![pool[0]; size];
    let mut best: Option<Roster> = None;
    for ordinals in combinator {
        arrange(pool, &ordinals, &mut candidate);
        let candidate_strength = total_strength(&candidate, strength)?;
        if best
            .as_ref()
            .map(|best| candidate_strength > best.strength)
            .unwrap_or(true)
        {
            best = Some(Roster {
                players: candidate.clone(),
                strength: candidate_strength,
            });
        }
    }

    // at least one candidate exists for 2 <= size <= pool.len()
    let best = best.ok_or(InvalidInput::RosterSize {
        size,
        pool: pool.len(),
    })?;
    debug!(
        "selected roster {} with strength {:.6}",
        DisplaySlice::from(&*best.players),
        best.strength
    );
    Ok(best)
}
