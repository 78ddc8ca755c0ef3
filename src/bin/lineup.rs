use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use strum_macros::{Display, EnumString};
use tracing::{debug, info};

use brumby_lineup::config::SearchConfig;
use brumby_lineup::display::{DisplayRotation, DisplaySlice};
use brumby_lineup::file::FromJsonFile;
use brumby_lineup::history::HistoryRecord;
use brumby_lineup::lineup::{minimax, optimise_against, order_by_strength, rounds};
use brumby_lineup::matrix::NetScoreMatrix;
use brumby_lineup::player::Player;
use brumby_lineup::print;
use brumby_lineup::roster;
use brumby_lineup::strength::PairStrength;
use brumby_lineup::timed::Timed;

const BUNDLED_HISTORY: &str = include_str!("../../data/history.json");

#[derive(Debug, Clone, Copy, PartialEq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum Mode {
    /// best ordering against a known opponent lineup
    Fixed,
    /// most robust ordering against the opponent's best counters
    Minimax,
    /// strongest roster, ordered by intrinsic pair strength
    Select,
}

#[derive(Debug, Clone)]
struct Players(Vec<Player>);

impl FromStr for Players {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let players = s
            .split(',')
            .map(Player::from_str)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self(players))
    }
}

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// history files to merge, in order (the bundled history if omitted)
    #[clap(short = 'f', long = "file")]
    files: Vec<PathBuf>,

    /// our players, comma-separated; also the planned lineup in minimax mode
    #[clap(short = 't', long, default_value = "A1,A2,A3,A4,A5", value_parser = Players::from_str)]
    team: Players,

    /// opposing players, comma-separated; also their lineup in fixed mode
    #[clap(short = 'o', long, default_value = "B1,B2,B3,B4,B5", value_parser = Players::from_str)]
    opponents: Players,

    /// search mode: fixed, minimax or select
    #[clap(short = 'm', long, default_value = "fixed", value_parser = Mode::from_str)]
    mode: Mode,

    /// roster size to select from our players (the number of opponents if omitted)
    #[clap(short = 'k', long)]
    roster_size: Option<usize>,

    /// search config file
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// print the net score matrix
    #[clap(long)]
    matrix: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.team.0.is_empty() || self.opponents.0.is_empty() {
            bail!("both sides must name at least one player");
        }
        let roster_size = self.roster_size();
        if roster_size > self.team.0.len() {
            bail!(
                "cannot field {roster_size} players from a team of {}",
                self.team.0.len()
            );
        }
        if self.mode != Mode::Select && roster_size != self.opponents.0.len() {
            bail!(
                "a roster of {roster_size} cannot face {} opponents",
                self.opponents.0.len()
            );
        }
        Ok(())
    }

    /// The number of our players to field; the number of opponents unless given.
    fn roster_size(&self) -> usize {
        self.roster_size.unwrap_or(self.opponents.0.len())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let config = match &args.config {
        None => SearchConfig::default(),
        Some(path) => SearchConfig::from_json_file(path)?,
    };
    config.validate()?;
    debug!("config: {config:?}");

    let history: HistoryRecord = if args.files.is_empty() {
        serde_json::from_str(BUNDLED_HISTORY)?
    } else {
        HistoryRecord::load(&args.files)?
    };
    info!("loaded {} confrontations", history.len());

    let (team_pool, opponents) = (&args.team.0, &args.opponents.0);
    let matrix = NetScoreMatrix::build(team_pool, opponents, &history)?;
    if args.matrix {
        info!(
            "net score matrix:\n{}",
            Console::default().render(&print::tabulate_matrix(&matrix))
        );
    }
    let strength = PairStrength::estimate(&matrix);
    debug!(
        "pair strengths:\n{}",
        Console::default().render(&print::tabulate_strengths(&strength))
    );

    let roster_size = args.roster_size();
    let team = if args.mode == Mode::Select || roster_size < team_pool.len() {
        let roster = roster::select(team_pool, roster_size, &strength)?;
        info!(
            "selected roster {} of {} with total strength {:.3}:\n{}",
            DisplaySlice::from(&*roster.players),
            DisplaySlice::from(&team_pool[..]),
            roster.strength,
            Console::default().render(&print::tabulate_roster(&roster, &strength))
        );
        roster.players
    } else {
        team_pool.clone()
    };

    match args.mode {
        Mode::Fixed => {
            let optimum = Timed::result(|| optimise_against(&team, opponents, &matrix, &config))?;
            info!(
                "best lineup against {}: {} with expected net score {:.3} (searched in {:.3}ms)",
                DisplayRotation::from(&opponents[..]),
                DisplayRotation::from(&*optimum.value.lineup),
                optimum.value.score,
                optimum.millis()
            );
            let rounds = rounds(&optimum.value.lineup, opponents, &matrix)?;
            info!(
                "rounds:\n{}",
                Console::default().render(&print::tabulate_rounds(&rounds))
            );
        }
        Mode::Minimax => {
            let outcome = Timed::result(|| minimax(&team, opponents, &matrix, &config))?;
            let minimax = &outcome.value;
            info!(
                "planned lineup {} is countered to {:.3} by {} opponent lineup(s); retained:\n{}",
                DisplayRotation::from(&team[..]),
                minimax.counter_score,
                minimax.tied_counters,
                Console::default().render(&print::tabulate_lineups(&minimax.counters))
            );
            info!(
                "maximin lineup {} guarantees {:.3} (searched in {:.3}ms)",
                DisplayRotation::from(&*minimax.optimum.lineup),
                minimax.optimum.score,
                outcome.millis()
            );
            if let Some(counter) = minimax.counters.first() {
                let rounds = rounds(&minimax.optimum.lineup, counter, &matrix)?;
                info!(
                    "rounds against {}:\n{}",
                    DisplayRotation::from(&counter[..]),
                    Console::default().render(&print::tabulate_rounds(&rounds))
                );
            }
        }
        Mode::Select => {
            let optimum = Timed::result(|| order_by_strength(&team, &strength, &config))?;
            info!(
                "strongest ordering {} with total strength {:.3} (searched in {:.3}ms)",
                DisplayRotation::from(&*optimum.value.lineup),
                optimum.value.score,
                optimum.millis()
            );
            if optimum.value.score > 0.0 {
                info!("a stable lineup advantage exists");
            } else {
                info!("no ordering holds a stable advantage");
            }
        }
    }

    Ok(())
}
