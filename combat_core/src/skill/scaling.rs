//! LevelScaling - per-level effect parameters
//!
//! An effect's strength at level L is `base + growth * (L - 1)`, for both
//! the coefficient and the flat component. Coefficients are on a 100 scale
//! (100 = one full attack power); they are not basis points.

use serde::{Deserialize, Serialize};

/// Coefficient and flat-damage growth curves for one skill effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelScaling {
    /// Coefficient at level 1, 100 scale
    #[serde(default)]
    pub base_coefficient: i64,
    /// Coefficient gained per level past 1
    #[serde(default)]
    pub coefficient_growth: i64,
    /// Flat damage at level 1
    #[serde(default)]
    pub base_flat_damage: i64,
    /// Flat damage gained per level past 1
    #[serde(default)]
    pub flat_damage_growth: i64,
}

impl LevelScaling {
    /// Effective coefficient at `level` (level >= 1)
    pub fn coefficient_at(&self, level: u32) -> i64 {
        self.base_coefficient + self.coefficient_growth * (level as i64 - 1)
    }

    /// Effective flat damage at `level` (level >= 1)
    pub fn flat_damage_at(&self, level: u32) -> i64 {
        self.base_flat_damage + self.flat_damage_growth * (level as i64 - 1)
    }
}
