//! Damage calculation - the five ordered pipeline stages
//!
//! Stage order is part of the contract: base → critical → enhancement →
//! defense → matchup. Rule 1 (post-defense damage never below 1) applies
//! before the rate multipliers, Rule 2 (at least 10% of the enhanced value)
//! after them, and the absolute `max(1, _)` clamp last. Every floor
//! truncates toward zero. Reordering any of these changes outcomes.

use super::breakdown::DamageBreakdown;
use super::constants::{BP, COEFFICIENT_SCALE, MIN_DAMAGE_RATIO};
use super::CombatError;
use crate::matchup::MatchupMatrix;
use crate::skill::LevelScaling;
use crate::stats::CombatantStats;
use crate::types::ElementType;
use rand::Rng;

/// Truncating basis-point scale: floor-toward-zero of `value * bp / 10000`
fn scale_bp(value: i64, bp: i64) -> i64 {
    (value as f64 * (bp as f64 / BP as f64)) as i64
}

/// Stage 1: base damage from attack power and the skill's level scaling
///
/// The coefficient is on a 100 scale (100 = one full attack power), not
/// basis points.
pub fn base_damage(attack_power: i64, effect: &LevelScaling, level: u32) -> i64 {
    let coefficient = effect.coefficient_at(level);
    let flat = effect.flat_damage_at(level);
    (attack_power as f64 * (coefficient as f64 / COEFFICIENT_SCALE)) as i64 + flat
}

/// Stage 2 roll: uniform draw in [0, 10000) against the clamped chance
///
/// This is the pipeline's only random input; everything downstream of the
/// returned bool is pure.
pub fn roll_critical(chance_bp: i64, rng: &mut impl Rng) -> bool {
    let chance = chance_bp.clamp(0, BP);
    rng.gen_range(0..BP) < chance
}

/// Stage 2: apply the critical multiplier when the roll succeeded
pub fn apply_critical(damage: i64, is_critical: bool, multiplier_bp: i64) -> i64 {
    if is_critical {
        scale_bp(damage, multiplier_bp)
    } else {
        damage
    }
}

/// Stage 3: elemental damage bonus, then the general damage increase
///
/// The result is the `enhanced` value Rule 2 floors against.
pub fn apply_enhancement(damage: i64, elemental_bonus_bp: i64, damage_increase_bp: i64) -> i64 {
    let damage = scale_bp(damage, BP + elemental_bonus_bp);
    scale_bp(damage, BP + damage_increase_bp)
}

/// Stage 4: defense, protection/reduction rates, and both damage floors
pub fn apply_defense(enhanced: i64, attacker: &CombatantStats, defender: &CombatantStats) -> i64 {
    let pen_rate = attacker.penetration_rate_bp();
    let effective_defense = (scale_bp(defender.defense, BP - pen_rate) - attacker.penetration).max(0);

    // Rule 1: never below 1 before the rate multipliers
    let after_defense = (enhanced - effective_defense).max(1);

    let protection_mult = 1.0 - defender.protection_rate_bp() as f64 / BP as f64;
    let reduction_mult = 1.0 - defender.damage_reduction_rate_bp() as f64 / BP as f64;
    let after_rates =
        (after_defense as f64 * protection_mult * reduction_mult) as i64 - defender.damage_reduction;

    // Rule 2: a hit deals at least 10% of its enhanced value no matter how
    // hard the defender mitigates
    let min_damage = (enhanced as f64 * MIN_DAMAGE_RATIO) as i64;
    after_rates.max(min_damage)
}

/// Stage 5: elemental matchup multiplier, then the absolute floor of 1
pub fn apply_matchup(damage: i64, multiplier: f64) -> i64 {
    ((damage as f64 * multiplier) as i64).max(1)
}

/// Resolve one hit using thread-local randomness for the critical roll
pub fn resolve_damage(
    attacker: &CombatantStats,
    defender: &CombatantStats,
    skill_element: ElementType,
    effect: &LevelScaling,
    level: u32,
    matchup: &mut MatchupMatrix,
) -> Result<DamageBreakdown, CombatError> {
    let mut rng = rand::thread_rng();
    resolve_damage_with_rng(attacker, defender, skill_element, effect, level, matchup, &mut rng)
}

/// Resolve one hit with a provided RNG (for deterministic testing)
pub fn resolve_damage_with_rng(
    attacker: &CombatantStats,
    defender: &CombatantStats,
    skill_element: ElementType,
    effect: &LevelScaling,
    level: u32,
    matchup: &mut MatchupMatrix,
    rng: &mut impl Rng,
) -> Result<DamageBreakdown, CombatError> {
    if level == 0 {
        return Err(CombatError::InvalidSkillLevel(level));
    }

    let base = base_damage(attacker.attack_power, effect, level);

    let is_critical = roll_critical(attacker.critical_chance_bp(), rng);
    let post_critical = apply_critical(base, is_critical, attacker.critical_damage_multiplier);

    let enhanced = apply_enhancement(
        post_critical,
        attacker.elemental_damage_bonus(skill_element),
        attacker.damage_increase,
    );

    let post_defense = apply_defense(enhanced, attacker, defender);

    let matchup_multiplier = matchup.get(skill_element, defender.element_type);
    let final_damage = apply_matchup(post_defense, matchup_multiplier);

    tracing::trace!(
        base,
        is_critical,
        enhanced,
        post_defense,
        matchup_multiplier,
        final_damage,
        "damage resolved"
    );

    Ok(DamageBreakdown {
        base,
        is_critical,
        post_critical,
        enhanced,
        post_defense,
        matchup_multiplier,
        final_damage,
    })
}
