//! The [NetScoreMatrix]: expected net score of every confrontation between one of our pairs and
//! one of the opponents' pairs.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::aggregate::net_score;
use crate::error::InvalidInput;
use crate::history::HistoryRecord;
use crate::player::{check_pool, pairs_of, Pair, Player, Side};

#[derive(Debug, Clone)]
pub struct NetScoreMatrix {
    team_pool: Vec<Player>,
    opponent_pool: Vec<Player>,
    team_pairs: Vec<Pair>,
    opponent_pairs: Vec<Pair>,
    scores: FxHashMap<(Pair, Pair), f64>,
}

impl NetScoreMatrix {
    /// Derives the matrix over all pairs formable from `team_pool` and `opponent_pool`.
    /// Confrontations absent from `history` are even (0.0). History entries naming players
    /// outside the pools are ignored.
    pub fn build(
        team_pool: &[Player],
        opponent_pool: &[Player],
        history: &HistoryRecord,
    ) -> Result<Self, InvalidInput> {
        let matrix = Self::from_fn(team_pool, opponent_pool, |team, opponents| {
            history
                .get(team, opponents)
                .map(net_score)
                .unwrap_or(0.0)
        })?;

        let mut ignored = 0;
        for (team, opponents, games) in history.iter() {
            if !team.within(team_pool) || !opponents.within(opponent_pool) {
                warn!(
                    "ignoring {} game(s) of {team} v {opponents}: outside the declared pools",
                    games.len()
                );
                ignored += 1;
            }
        }
        debug!(
            "built {}x{} net score matrix from {} confrontations ({ignored} ignored)",
            matrix.team_pairs.len(),
            matrix.opponent_pairs.len(),
            history.len()
        );
        Ok(matrix)
    }

    /// A matrix whose every confrontation is scored by `f`.
    pub fn from_fn(
        team_pool: &[Player],
        opponent_pool: &[Player],
        mut f: impl FnMut(&Pair, &Pair) -> f64,
    ) -> Result<Self, InvalidInput> {
        check_pool(team_pool, Side::Team)?;
        check_pool(opponent_pool, Side::Opponent)?;
        let team_pairs = pairs_of(team_pool)?;
        let opponent_pairs = pairs_of(opponent_pool)?;

        let mut scores = FxHashMap::with_capacity_and_hasher(
            team_pairs.len() * opponent_pairs.len(),
            Default::default(),
        );
        for team in &team_pairs {
            for opponents in &opponent_pairs {
                scores.insert((*team, *opponents), f(team, opponents));
            }
        }
        Ok(Self {
            team_pool: team_pool.to_vec(),
            opponent_pool: opponent_pool.to_vec(),
            team_pairs,
            opponent_pairs,
            scores,
        })
    }

    /// The net score of `team` against `opponents`; 0.0 for a confrontation outside the
    /// matrix.
    #[inline]
    pub fn get(&self, team: &Pair, opponents: &Pair) -> f64 {
        self.scores
            .get(&(*team, *opponents))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn team_pool(&self) -> &[Player] {
        &self.team_pool
    }

    pub fn opponent_pool(&self) -> &[Player] {
        &self.opponent_pool
    }

    pub fn team_pairs(&self) -> &[Pair] {
        &self.team_pairs
    }

    pub fn opponent_pairs(&self) -> &[Pair] {
        &self.opponent_pairs
    }

    /// The net scores of `team` against each of [Self::opponent_pairs], in that order.
    pub fn row(&self, team: &Pair) -> impl Iterator<Item = f64> + '_ {
        let team = *team;
        self.opponent_pairs
            .iter()
            .map(move |opponents| self.get(&team, opponents))
    }
}
