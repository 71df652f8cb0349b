//! Elemental matchup system - attacker vs defender damage multipliers

mod matrix;

pub use matrix::{MatchupMatrix, DEFAULT_MULTIPLIER};
