//! Players and the canonical [Pair] they form. A [Player] is rendered as a side prefix
//! followed by a one-based number, e.g. `A3` for the third player of our team and `B2` for the
//! second opponent. A [Pair] is rendered as `A1-A3`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Team,
    Opponent,
}
impl Side {
    pub fn prefix(&self) -> char {
        match self {
            Side::Team => 'A',
            Side::Opponent => 'B',
        }
    }

    fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'A' => Some(Side::Team),
            'B' => Some(Side::Opponent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player {
    side: Side,
    number: u8,
}

impl Player {
    pub fn team(number: u8) -> Self {
        Self::try_new(Side::Team, number).unwrap()
    }

    pub fn opponent(number: u8) -> Self {
        Self::try_new(Side::Opponent, number).unwrap()
    }

    pub fn try_new(side: Side, number: u8) -> anyhow::Result<Self> {
        if number == 0 {
            bail!("invalid player number");
        }
        Ok(Self { side, number })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn number(&self) -> u8 {
        self.number
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.side.prefix(), self.number)
    }
}

impl FromStr for Player {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let first_char = chars.next().context("no characters to parse")?;
        let side = match Side::from_prefix(first_char) {
            Some(side) => side,
            None => bail!("first character must be 'A' or 'B'"),
        };
        let number: u8 = chars.as_str().parse()?;
        Player::try_new(side, number)
    }
}

/// Shorthand for `n` consecutively-numbered players on one side, starting from 1.
pub fn roll(side: Side, n: u8) -> Vec<Player> {
    (1..=n)
        .map(|number| Player { side, number })
        .collect()
}

/// Two distinct players from the same side, held in sorted order so that the pair formed
/// from `(p, q)` is indistinguishable from that formed from `(q, p)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pair([Player; 2]);

impl Pair {
    pub fn new(a: Player, b: Player) -> Result<Self, InvalidInput> {
        if a == b {
            return Err(InvalidInput::DuplicatePlayer(a));
        }
        if a.side != b.side {
            return Err(InvalidInput::MixedSides(a, b));
        }
        Ok(if a < b { Self([a, b]) } else { Self([b, a]) })
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.0
    }

    pub fn side(&self) -> Side {
        self.0[0].side
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.0.contains(player)
    }

    /// Whether both players are members of `pool`.
    pub fn within(&self, pool: &[Player]) -> bool {
        self.0.iter().all(|player| pool.contains(player))
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}

impl FromStr for Pair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s.split_once('-').context("pair must be of the form 'P-Q'")?;
        let (first, second) = (Player::from_str(first)?, Player::from_str(second)?);
        Ok(Pair::new(first, second)?)
    }
}

impl TryFrom<String> for Pair {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Pair::from_str(&value)
    }
}

impl From<Pair> for String {
    fn from(pair: Pair) -> Self {
        pair.to_string()
    }
}

/// Checks that `pool` holds distinct players, all from the `expected` side.
pub fn check_pool(pool: &[Player], expected: Side) -> Result<(), InvalidInput> {
    for (index, player) in pool.iter().enumerate() {
        if player.side != expected {
            return Err(InvalidInput::WrongSide {
                player: *player,
                expected,
            });
        }
        if pool[index + 1..].contains(player) {
            return Err(InvalidInput::DuplicatePlayer(*player));
        }
    }
    Ok(())
}

/// All pairs formed from `pool`, in lexicographic order of pool positions.
pub fn pairs_of(pool: &[Player]) -> Result<Vec<Pair>, InvalidInput> {
    let mut pairs = Vec::with_capacity(pool.len() * pool.len().saturating_sub(1) / 2);
    for (index, &first) in pool.iter().enumerate() {
        for &second in &pool[index + 1..] {
            pairs.push(Pair::new(first, second)?);
        }
    }
    Ok(pairs)
}
