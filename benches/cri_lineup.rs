use criterion::{criterion_group, criterion_main, Criterion};

use brumby_lineup::config::SearchConfig;
use brumby_lineup::history::HistoryRecord;
use brumby_lineup::lineup::{minimax, optimise_against, schedule_score};
use brumby_lineup::matrix::NetScoreMatrix;
use brumby_lineup::player::{roll, Side};

fn criterion_benchmark(c: &mut Criterion) {
    let history: HistoryRecord =
        serde_json::from_str(include_str!("../data/history.json")).unwrap();
    let (team, opponents) = (roll(Side::Team, 5), roll(Side::Opponent, 5));
    let matrix = NetScoreMatrix::build(&team, &opponents, &history).unwrap();
    let config = SearchConfig::default();

    // sanity check
    let optimum = optimise_against(&team, &opponents, &matrix, &config).unwrap();
    assert_eq!(
        optimum.score,
        schedule_score(&optimum.lineup, &opponents, &matrix).unwrap()
    );

    c.bench_function("cri_lineup_schedule_score", |b| {
        b.iter(|| schedule_score(&team, &opponents, &matrix).unwrap());
    });

    c.bench_function("cri_lineup_optimise_against", |b| {
        b.iter(|| optimise_against(&team, &opponents, &matrix, &config).unwrap());
    });

    c.bench_function("cri_lineup_minimax", |b| {
        b.iter(|| minimax(&team, &opponents, &matrix, &config).unwrap());
    });

    let (team, opponents) = (roll(Side::Team, 7), roll(Side::Opponent, 7));
    let matrix = NetScoreMatrix::build(&team, &opponents, &history).unwrap();
    c.bench_function("cri_lineup_optimise_against_7", |b| {
        b.iter(|| optimise_against(&team, &opponents, &matrix, &config).unwrap());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
