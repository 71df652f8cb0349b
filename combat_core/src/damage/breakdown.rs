//! DamageBreakdown - per-stage record of one damage resolution

use serde::{Deserialize, Serialize};

/// Output of the damage pipeline with every intermediate stage value
///
/// `final_damage` is the number to apply to the defender; the rest exists
/// for combat logs, damage preview UIs, and stage-level assertions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Stage 1: attack power scaled by the skill coefficient, plus flat
    pub base: i64,
    /// Whether the critical roll succeeded
    pub is_critical: bool,
    /// Stage 2: base after the critical multiplier (== base when not
    /// critical)
    pub post_critical: i64,
    /// Stage 3: after elemental bonus and damage increase; the baseline for
    /// the minimum-damage floor
    pub enhanced: i64,
    /// Stage 4: after defense, rate mitigation, and both floors
    pub post_defense: i64,
    /// Stage 5 input: elemental matchup multiplier that was applied
    pub matchup_multiplier: f64,
    /// Stage 5: the final clamped damage, always >= 1
    pub final_damage: i64,
}
