//! Lineup optimisation for round-robin doubles ties. Derives expected net scores of every pair
//! confrontation from head-to-head score history, then exhaustively searches the orderings of
//! each side's players for the best (or most robust) cyclic lineup, and the strongest roster
//! when more players are available than there are places.

pub mod aggregate;
pub mod comb;
pub mod config;
pub mod display;
pub mod error;
pub mod file;
pub mod history;
pub mod lineup;
pub mod matrix;
pub mod player;
pub mod print;
pub mod roster;
pub mod strength;
pub mod timed;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
