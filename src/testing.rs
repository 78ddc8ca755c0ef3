//! Testing helpers and fixtures.

use tinyrand::{Rand, Seeded, StdRand};

use crate::history::HistoryRecord;
use crate::matrix::NetScoreMatrix;
use crate::player::{roll, Side};

/// The five-a-side history bundled in `data/history.json`.
pub fn sample_history() -> HistoryRecord {
    serde_json::from_str(include_str!("../data/history.json")).unwrap()
}

/// [sample_history] merged with the sixth-player games of `data/history_ext.json`.
pub fn extended_history() -> HistoryRecord {
    let mut history = sample_history();
    history.merge(serde_json::from_str(include_str!("../data/history_ext.json")).unwrap());
    history
}

/// A1..A5 v B1..B5 over [sample_history].
pub fn sample_matrix() -> NetScoreMatrix {
    NetScoreMatrix::build(
        &roll(Side::Team, 5),
        &roll(Side::Opponent, 5),
        &sample_history(),
    )
    .unwrap()
}

/// A matrix of uniformly-distributed net scores in [-10, 10], reproducible for a given `seed`.
pub fn random_matrix(players: u8, seed: u64) -> NetScoreMatrix {
    let mut rand = StdRand::seed(seed);
    NetScoreMatrix::from_fn(
        &roll(Side::Team, players),
        &roll(Side::Opponent, players),
        |_, _| rand.next_u64() as f64 / u64::MAX as f64 * 20.0 - 10.0,
    )
    .unwrap()
}
