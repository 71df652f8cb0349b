//! Core types shared across the combat engine

use serde::{Deserialize, Serialize};

/// Elemental affinity of a unit or skill
///
/// Declaration order is load-bearing: it defines row/column indices in the
/// [`MatchupMatrix`](crate::matchup::MatchupMatrix). New elements must be
/// appended at the end so previously authored matchup data keeps its
/// position when the matrix migrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    None,
    Water,
    Fire,
    Wind,
    Earth,
    Lightning,
    Dark,
    Light,
    Normal,
}

impl ElementType {
    /// All elements in matrix index order
    pub fn all() -> &'static [ElementType] {
        &[
            ElementType::None,
            ElementType::Water,
            ElementType::Fire,
            ElementType::Wind,
            ElementType::Earth,
            ElementType::Lightning,
            ElementType::Dark,
            ElementType::Light,
            ElementType::Normal,
        ]
    }

    /// Row/column index into the matchup matrix
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Armor class of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorType {
    None,
    Light,
    Medium,
    Heavy,
}

/// Unit grade, used for encounter composition rather than combat math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    None,
    Common,
    Elite,
    Boss,
}

/// Which side a combatant fights for
///
/// Used by targeting queries only; the scheduler treats all factions alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Player,
    Enemy,
}

/// Skill rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

/// Identifier for a combatant tracked by the scheduler
///
/// Assigned at registration and never reused within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombatantId(pub u32);
