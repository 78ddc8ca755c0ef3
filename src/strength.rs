//! Intrinsic, opponent-agnostic strength of each of our pairs.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::matrix::NetScoreMatrix;
use crate::player::Pair;

/// Mean net score of each of our pairs across every opponent pair in the matrix. A
/// confrontation without history counts as an even result, so a pair tested against few
/// opponents is pulled toward 0.
#[derive(Debug, Clone)]
pub struct PairStrength {
    pairs: Vec<Pair>,
    strengths: FxHashMap<Pair, f64>,
}

impl PairStrength {
    pub fn estimate(matrix: &NetScoreMatrix) -> Self {
        let num_opponent_pairs = matrix.opponent_pairs().len();
        let pairs = matrix.team_pairs().to_vec();
        let strengths = pairs
            .iter()
            .map(|team| {
                let strength = if num_opponent_pairs == 0 {
                    0.0
                } else {
                    matrix.row(team).sum::<f64>() / num_opponent_pairs as f64
                };
                (*team, strength)
            })
            .collect::<FxHashMap<_, _>>();
        debug!(
            "estimated strengths of {} pairs over {num_opponent_pairs} opponent pairs",
            pairs.len()
        );
        Self { pairs, strengths }
    }

    /// The strength of `pair`; 0.0 if it was not estimated.
    #[inline]
    pub fn get(&self, pair: &Pair) -> f64 {
        self.strengths.get(pair).copied().unwrap_or(0.0)
    }

    /// Estimated pairs with their strengths, in matrix order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair, f64)> {
        self.pairs.iter().map(|pair| (pair, self.get(pair)))
    }
}
