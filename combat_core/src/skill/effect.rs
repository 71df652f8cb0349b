//! SkillEffect - the effect kinds a skill can carry
//!
//! Effects are a closed tagged union rather than trait objects: combat
//! needs to serialize them, and the set of kinds is part of the game
//! design, not an extension point.

use super::scaling::LevelScaling;
use crate::damage::{resolve_damage_with_rng, CombatError, DamageBreakdown};
use crate::damage::constants::COEFFICIENT_SCALE;
use crate::matchup::MatchupMatrix;
use crate::stats::CombatantStats;
use crate::types::ElementType;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One effect carried by a skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkillEffect {
    /// Run the damage pipeline against the target and apply the result
    Damage(LevelScaling),
    /// Restore target health scaled off the caster's attack power plus the
    /// target's recovery amount
    Heal(LevelScaling),
}

/// What applying one effect did
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EffectOutcome {
    Damage {
        breakdown: DamageBreakdown,
        /// True when the hit reduced the target to 0 health
        defeated: bool,
    },
    Heal {
        /// Health actually restored after the max-health clamp
        amount: i64,
    },
}

impl SkillEffect {
    /// Apply this effect from `attacker` to `target`
    pub fn apply(
        &self,
        attacker: &CombatantStats,
        target: &mut CombatantStats,
        skill_element: ElementType,
        level: u32,
        matchup: &mut MatchupMatrix,
        rng: &mut impl Rng,
    ) -> Result<EffectOutcome, CombatError> {
        match self {
            SkillEffect::Damage(scaling) => {
                let breakdown = resolve_damage_with_rng(
                    attacker,
                    target,
                    skill_element,
                    scaling,
                    level,
                    matchup,
                    rng,
                )?;
                let defeated = target.take_damage(breakdown.final_damage);
                if defeated {
                    tracing::debug!(damage = breakdown.final_damage, "target defeated");
                }
                Ok(EffectOutcome::Damage { breakdown, defeated })
            }
            SkillEffect::Heal(scaling) => {
                if level == 0 {
                    return Err(CombatError::InvalidSkillLevel(level));
                }
                let coefficient = scaling.coefficient_at(level);
                let scaled =
                    (attacker.attack_power as f64 * (coefficient as f64 / COEFFICIENT_SCALE)) as i64;
                let raw = scaled + scaling.flat_damage_at(level) + target.recovery_amount;
                let amount = target.heal(raw);
                Ok(EffectOutcome::Heal { amount })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_test_rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_damage_effect_defeats_target() {
        let effect = SkillEffect::Damage(LevelScaling {
            base_coefficient: 100,
            ..Default::default()
        });
        let mut attacker = CombatantStats::new();
        attacker.attack_power = 500;
        let mut target = CombatantStats::new();
        target.max_health = 300;
        target.current_health = 300;
        let mut matchup = MatchupMatrix::new();
        let mut rng = make_test_rng();

        let outcome = effect
            .apply(
                &attacker,
                &mut target,
                ElementType::None,
                1,
                &mut matchup,
                &mut rng,
            )
            .unwrap();

        match outcome {
            EffectOutcome::Damage { breakdown, defeated } => {
                assert_eq!(breakdown.final_damage, 500);
                assert!(defeated);
            }
            other => panic!("expected a damage outcome, got {:?}", other),
        }
        assert_eq!(target.current_health, 0);
        assert!(!target.is_alive());
    }

    #[test]
    fn test_heal_effect_scales_and_clamps() {
        let effect = SkillEffect::Heal(LevelScaling {
            base_coefficient: 50,
            coefficient_growth: 10,
            base_flat_damage: 20,
            flat_damage_growth: 0,
        });
        let mut attacker = CombatantStats::new();
        attacker.attack_power = 100;
        let mut target = CombatantStats::new();
        target.max_health = 1000;
        target.current_health = 900;
        target.recovery_amount = 5;
        let mut matchup = MatchupMatrix::new();
        let mut rng = make_test_rng();

        // Level 2: 100 * 60% + 20 flat + 5 recovery = 85
        let outcome = effect
            .apply(
                &attacker,
                &mut target,
                ElementType::Light,
                2,
                &mut matchup,
                &mut rng,
            )
            .unwrap();
        match outcome {
            EffectOutcome::Heal { amount } => assert_eq!(amount, 85),
            other => panic!("expected a heal outcome, got {:?}", other),
        }
        assert_eq!(target.current_health, 985);

        // A second cast overshoots and clamps at max health
        let outcome = effect
            .apply(
                &attacker,
                &mut target,
                ElementType::Light,
                2,
                &mut matchup,
                &mut rng,
            )
            .unwrap();
        match outcome {
            EffectOutcome::Heal { amount } => assert_eq!(amount, 15),
            other => panic!("expected a heal outcome, got {:?}", other),
        }
        assert_eq!(target.current_health, 1000);
    }
}
