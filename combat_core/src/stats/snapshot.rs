//! CombatantStats - the per-combat stat snapshot
//!
//! Rate fields are basis points: 10000 = 100%. Skill coefficients are on a
//! separate 100 scale and never mix with these fields. The damage pipeline
//! reads rates through the clamping accessors, never the raw fields, so
//! out-of-range authored data cannot leak into the math.

use crate::damage::constants::{BP, PEN_RATE_CAP_BP};
use crate::types::{ArmorType, ElementType};
use serde::{Deserialize, Serialize};

/// Bonus damage when attacking with a specific element, in basis points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalDamageBonus {
    pub element: ElementType,
    pub bonus_bp: i64,
}

/// Runtime stat snapshot owned by a single combatant
///
/// Created once per combat entry by cloning a [`UnitTemplate`]'s stats, so
/// runtime mutation (health loss, future buffs) never touches authored data.
/// `Clone` deep-copies the owned bonus list; snapshots never alias.
///
/// [`UnitTemplate`]: crate::stats::UnitTemplate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantStats {
    // === Identity ===
    pub armor_type: ArmorType,
    pub element_type: ElementType,

    // === Resources ===
    pub max_health: i64,
    pub current_health: i64,
    pub max_mana: i64,
    pub current_mana: i64,

    // === Offense ===
    pub attack_power: i64,
    /// Chance to critically strike, bp (clamped 0..=10000 on read)
    #[serde(default)]
    pub critical_chance: i64,
    /// Damage multiplier on a critical strike, bp (15000 = 150%)
    #[serde(default = "default_critical_multiplier")]
    pub critical_damage_multiplier: i64,
    /// General outgoing damage increase, bp
    #[serde(default)]
    pub damage_increase: i64,
    #[serde(default)]
    pub mana_regeneration: i64,
    /// Fraction of defender defense ignored, bp (hard-capped at 6000 on read)
    #[serde(default)]
    pub penetration_rate: i64,
    /// Flat defense ignored, applied after the rate
    #[serde(default)]
    pub penetration: i64,
    #[serde(default)]
    pub mana_on_kill: i64,
    #[serde(default)]
    pub life_steal: i64,
    /// Readiness gained per scheduler tick
    pub attack_speed: i32,

    // === Defense ===
    #[serde(default)]
    pub defense: i64,
    /// bp, clamped 0..=10000 on read
    #[serde(default)]
    pub protection_rate: i64,
    /// bp, clamped 0..=10000 on read
    #[serde(default)]
    pub damage_reduction_rate: i64,
    /// Flat amount subtracted after the rate multipliers
    #[serde(default)]
    pub damage_reduction: i64,
    #[serde(default)]
    pub evasion_rate: i64,
    #[serde(default)]
    pub recovery_amount: i64,
    #[serde(default)]
    pub health_on_kill: i64,

    // === Elemental ===
    /// Per-element outgoing damage bonuses, bp; absent element means 0
    #[serde(default)]
    pub elemental_damage_bonuses: Vec<ElementalDamageBonus>,
}

fn default_critical_multiplier() -> i64 {
    15000
}

impl Default for CombatantStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatantStats {
    /// Baseline snapshot: a neutral unit with no rates and no bonuses
    pub fn new() -> Self {
        CombatantStats {
            armor_type: ArmorType::None,
            element_type: ElementType::None,
            max_health: 100,
            current_health: 100,
            max_mana: 100,
            current_mana: 100,
            attack_power: 0,
            critical_chance: 0,
            critical_damage_multiplier: default_critical_multiplier(),
            damage_increase: 0,
            mana_regeneration: 0,
            penetration_rate: 0,
            penetration: 0,
            mana_on_kill: 0,
            life_steal: 0,
            attack_speed: 0,
            defense: 0,
            protection_rate: 0,
            damage_reduction_rate: 0,
            damage_reduction: 0,
            evasion_rate: 0,
            recovery_amount: 0,
            health_on_kill: 0,
            elemental_damage_bonuses: Vec::new(),
        }
    }

    /// Critical chance clamped to its valid range
    pub fn critical_chance_bp(&self) -> i64 {
        self.critical_chance.clamp(0, BP)
    }

    /// Penetration rate clamped to the hard cap
    pub fn penetration_rate_bp(&self) -> i64 {
        self.penetration_rate.clamp(0, PEN_RATE_CAP_BP)
    }

    /// Protection rate clamped to 0..=10000
    pub fn protection_rate_bp(&self) -> i64 {
        self.protection_rate.clamp(0, BP)
    }

    /// Damage reduction rate clamped to 0..=10000
    pub fn damage_reduction_rate_bp(&self) -> i64 {
        self.damage_reduction_rate.clamp(0, BP)
    }

    /// Outgoing damage bonus against `element`, bp; 0 when unlisted
    pub fn elemental_damage_bonus(&self, element: ElementType) -> i64 {
        self.elemental_damage_bonuses
            .iter()
            .find(|b| b.element == element)
            .map(|b| b.bonus_bp)
            .unwrap_or(0)
    }

    /// Apply final damage to health; returns true on a killing blow
    pub fn take_damage(&mut self, amount: i64) -> bool {
        self.current_health -= amount;
        if self.current_health <= 0 {
            self.current_health = 0;
            return true;
        }
        false
    }

    /// Restore health, clamped at max; returns the amount actually healed
    pub fn heal(&mut self, amount: i64) -> i64 {
        let before = self.current_health;
        self.current_health = (self.current_health + amount.max(0)).min(self.max_health);
        self.current_health - before
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_accessors_clamp() {
        let mut stats = CombatantStats::new();
        stats.critical_chance = 25000;
        stats.penetration_rate = 9000;
        stats.protection_rate = -500;
        stats.damage_reduction_rate = 12000;

        assert_eq!(stats.critical_chance_bp(), 10000);
        assert_eq!(stats.penetration_rate_bp(), 6000);
        assert_eq!(stats.protection_rate_bp(), 0);
        assert_eq!(stats.damage_reduction_rate_bp(), 10000);
    }

    #[test]
    fn test_elemental_bonus_defaults_to_zero() {
        let mut stats = CombatantStats::new();
        stats.elemental_damage_bonuses = vec![ElementalDamageBonus {
            element: ElementType::Fire,
            bonus_bp: 2000,
        }];

        assert_eq!(stats.elemental_damage_bonus(ElementType::Fire), 2000);
        assert_eq!(stats.elemental_damage_bonus(ElementType::Water), 0);
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut stats = CombatantStats::new();
        stats.max_health = 100;
        stats.current_health = 100;

        assert!(!stats.take_damage(60));
        assert_eq!(stats.current_health, 40);
        assert!(stats.take_damage(999));
        assert_eq!(stats.current_health, 0);
        assert!(!stats.is_alive());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut stats = CombatantStats::new();
        stats.max_health = 100;
        stats.current_health = 70;

        assert_eq!(stats.heal(50), 30);
        assert_eq!(stats.current_health, 100);
        assert_eq!(stats.heal(-10), 0);
    }

    #[test]
    fn test_clone_does_not_alias_bonus_list() {
        let mut original = CombatantStats::new();
        original.elemental_damage_bonuses = vec![ElementalDamageBonus {
            element: ElementType::Dark,
            bonus_bp: 1000,
        }];

        let mut copy = original.clone();
        copy.elemental_damage_bonuses[0].bonus_bp = 9999;

        assert_eq!(original.elemental_damage_bonus(ElementType::Dark), 1000);
    }
}
