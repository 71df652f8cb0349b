//! combat_core - Turn-based combat resolution engine
//!
//! This library provides:
//! - CombatantStats: per-combat stat snapshots cloned from templates
//! - Damage pipeline: five ordered stages from base damage to the final
//!   clamped amount
//! - MatchupMatrix: elemental advantage multipliers with data migration
//! - TurnScheduler: readiness-based actor selection and turn prediction
//!
//! Rendering, input, AI targeting, and persistence live outside this crate;
//! it consumes stat snapshots and skill data and produces damage numbers
//! and turn signals.

pub mod config;
pub mod damage;
pub mod matchup;
pub mod prelude;
pub mod scheduler;
pub mod skill;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use config::{default_skills, default_units, ConfigError};
pub use damage::{resolve_damage, resolve_damage_with_rng, CombatError, DamageBreakdown};
pub use matchup::{MatchupMatrix, DEFAULT_MULTIPLIER};
pub use scheduler::{Combatant, TurnScheduler, READINESS_THRESHOLD};
pub use skill::{EffectOutcome, LevelScaling, SkillData, SkillEffect};
pub use stats::{CombatantStats, ElementalDamageBonus, UnitTemplate};
pub use types::{ArmorType, CombatantId, ElementType, Faction, SkillRarity, UnitKind};
