//! SkillData - authored skill definitions
//!
//! Loaded from TOML configuration.

use super::effect::{EffectOutcome, SkillEffect};
use crate::damage::CombatError;
use crate::matchup::MatchupMatrix;
use crate::stats::CombatantStats;
use crate::types::{ElementType, SkillRarity};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An authored skill: identity, element, level range, and its effect list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillData {
    /// Unique skill identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Flavor description
    #[serde(default)]
    pub description: String,
    /// Element carried by every effect of this skill
    pub element: ElementType,
    /// Highest castable level
    #[serde(default = "default_max_level")]
    pub max_level: u32,
    /// Turns before the skill can be used again
    #[serde(default)]
    pub cooldown: u32,
    #[serde(default = "default_rarity")]
    pub rarity: SkillRarity,
    /// Effects executed in order against the target
    #[serde(default)]
    pub effects: Vec<SkillEffect>,
}

fn default_max_level() -> u32 {
    1
}

fn default_rarity() -> SkillRarity {
    SkillRarity::Common
}

impl SkillData {
    /// Execute every effect of this skill against the target, in order
    ///
    /// Validates the level against this skill's range before any effect
    /// runs; on violation nothing is applied.
    pub fn execute(
        &self,
        attacker: &CombatantStats,
        target: &mut CombatantStats,
        level: u32,
        matchup: &mut MatchupMatrix,
        rng: &mut impl Rng,
    ) -> Result<Vec<EffectOutcome>, CombatError> {
        if level == 0 {
            return Err(CombatError::InvalidSkillLevel(level));
        }
        if level > self.max_level {
            return Err(CombatError::LevelAboveMax {
                level,
                max_level: self.max_level,
            });
        }
        if self.effects.is_empty() {
            return Err(CombatError::EmptyEffects);
        }

        let mut outcomes = Vec::with_capacity(self.effects.len());
        for effect in &self.effects {
            outcomes.push(effect.apply(attacker, target, self.element, level, matchup, rng)?);
        }
        Ok(outcomes)
    }
}
