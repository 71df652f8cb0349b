//! Damage system - the five-stage resolution pipeline

mod breakdown;
mod calculation;

pub use breakdown::DamageBreakdown;
pub use calculation::{
    apply_critical, apply_defense, apply_enhancement, apply_matchup, base_damage, resolve_damage,
    resolve_damage_with_rng, roll_critical,
};

use thiserror::Error;

/// Combat precondition violation
///
/// The pipeline refuses to compute rather than guess; no partial damage is
/// ever returned alongside one of these.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatError {
    #[error("skill level must be at least 1, got {0}")]
    InvalidSkillLevel(u32),
    #[error("skill level {level} exceeds the skill's max level {max_level}")]
    LevelAboveMax { level: u32, max_level: u32 },
    #[error("skill has no effects to execute")]
    EmptyEffects,
}

/// Pipeline constants
pub mod constants {
    /// Basis-point scale: 10000 bp = 100%. Rate stats live on this scale.
    pub const BP: i64 = 10_000;

    /// Hard cap on penetration rate: defense can be pierced at most 60%
    pub const PEN_RATE_CAP_BP: i64 = 6_000;

    /// Rule 2: a hit always deals at least this fraction of its enhanced
    /// (pre-defense, pre-matchup) damage
    pub const MIN_DAMAGE_RATIO: f64 = 0.10;

    /// Skill coefficients are percentages on a 100 scale, NOT basis points.
    /// The two scales are distinct on purpose; do not unify them.
    pub const COEFFICIENT_SCALE: f64 = 100.0;
}
