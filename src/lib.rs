//! Move evaluation for five-in-a-row on a square board.
//!
//! - [`core`]: padded board, colors, moves
//! - [`logic`]: run-length scanning, tactical signals, terminal detection
//! - [`player`]: random, tactical and flat Monte Carlo players
//! - [`selfplay`]: batch games between players

pub mod core;
pub mod error;
pub mod logic;
pub mod player;
pub mod selfplay;

#[cfg(test)]
mod logic_tests;

pub use crate::core::{Cell, Color, Grid, Move, Point, PASS};
pub use crate::error::GomokuError;
pub use crate::logic::{GameResult, TacticalTier};
pub use crate::player::ai::{AIConfig, Evaluation, FlatMonteCarlo, PlayoutPolicy};
