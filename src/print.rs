use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::display::DisplayRotation;
use crate::lineup::Round;
use crate::matrix::NetScoreMatrix;
use crate::player::Player;
use crate::roster::Roster;
use crate::strength::PairStrength;

pub fn tabulate_matrix(matrix: &NetScoreMatrix) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(7))
                    .with(Left),
            )];
            for _ in matrix.opponent_pairs() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(7)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["".into()];
            for opponents in matrix.opponent_pairs() {
                header_cells.push(format!("{opponents}").into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    for team in matrix.team_pairs() {
        let mut row_cells = vec![format!("{team}").into()];
        for net_score in matrix.row(team) {
            row_cells.push(format!("{net_score:.3}").into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}

pub fn tabulate_strengths(strength: &PairStrength) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(7)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Pair".into(), "Strength".into()],
        ));
    for (pair, strength) in strength.iter() {
        table.push_row(Row::new(
            Styles::default(),
            vec![format!("{pair}").into(), format!("{strength:.6}").into()],
        ));
    }
    table
}

pub fn tabulate_rounds(rounds: &[Round]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "Round".into(),
                "Team".into(),
                "Opponents".into(),
                "Net score".into(),
            ],
        ));
    for round in rounds {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", round.number).into(),
                format!("{}", round.team).into(),
                format!("{}", round.opponents).into(),
                format!("{:.3}", round.net_score).into(),
            ],
        ));
    }
    let total = rounds.iter().map(|round| round.net_score).sum::<f64>();
    table.push_row(Row::new(
        Styles::default().with(Separator(true)),
        vec!["".into(), "".into(), "Total".into(), format!("{total:.3}").into()],
    ));
    table
}

pub fn tabulate_lineups(lineups: &[Vec<Player>]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(3)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(20)).with(Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["#".into(), "Lineup".into()],
        ));
    for (index, lineup) in lineups.iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", index + 1).into(),
                format!("{}", DisplayRotation::from(&lineup[..])).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_roster(roster: &Roster, strength: &PairStrength) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(7)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Pair".into(), "Strength".into()],
        ));
    for (pair, pair_strength) in strength.iter() {
        if pair.within(&roster.players) {
            table.push_row(Row::new(
                Styles::default(),
                vec![format!("{pair}").into(), format!("{pair_strength:.6}").into()],
            ));
        }
    }
    table.push_row(Row::new(
        Styles::default().with(Separator(true)),
        vec!["Total".into(), format!("{:.6}", roster.strength).into()],
    ));
    table
}
