//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::stats::{CombatantStats, ElementalDamageBonus, UnitTemplate};
pub use crate::types::{ArmorType, CombatantId, ElementType, Faction, SkillRarity, UnitKind};

// Damage pipeline
pub use crate::damage::{resolve_damage, resolve_damage_with_rng, CombatError, DamageBreakdown};

// Matchups
pub use crate::matchup::{MatchupMatrix, DEFAULT_MULTIPLIER};

// Skills
pub use crate::skill::{EffectOutcome, LevelScaling, SkillData, SkillEffect};

// Scheduling
pub use crate::scheduler::{Combatant, TurnScheduler, READINESS_THRESHOLD};

// Config
pub use crate::config::{default_skills, default_units};
