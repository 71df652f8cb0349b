//! UnitTemplate - authored unit definitions
//!
//! Templates are loaded from TOML and never mutated at runtime; combat
//! entry spawns a fresh [`CombatantStats`] snapshot from them.

use super::CombatantStats;
use crate::types::UnitKind;
use serde::{Deserialize, Serialize};

/// An authored unit definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitTemplate {
    /// Unique template identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Flavor description
    #[serde(default)]
    pub description: String,
    /// Unit grade
    #[serde(default = "default_kind")]
    pub kind: UnitKind,
    /// Encounter difficulty weight
    #[serde(default)]
    pub threat_level: i32,
    /// Authored stats; spawned combatants get a deep copy
    pub stats: CombatantStats,
}

fn default_kind() -> UnitKind {
    UnitKind::Common
}

impl UnitTemplate {
    /// Produce a runtime snapshot with full resources
    pub fn spawn(&self) -> CombatantStats {
        let mut stats = self.stats.clone();
        stats.current_health = stats.max_health;
        stats.current_mana = stats.max_mana;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementType;

    fn goblin() -> UnitTemplate {
        let mut stats = CombatantStats::new();
        stats.max_health = 500;
        stats.current_health = 250; // authored mid-fight value should not leak
        stats.attack_power = 80;
        stats.element_type = ElementType::Earth;
        UnitTemplate {
            id: "goblin".to_string(),
            name: "Goblin".to_string(),
            description: String::new(),
            kind: UnitKind::Common,
            threat_level: 1,
            stats,
        }
    }

    #[test]
    fn test_spawn_refills_resources() {
        let template = goblin();
        let snapshot = template.spawn();
        assert_eq!(snapshot.current_health, 500);
        assert_eq!(snapshot.current_mana, snapshot.max_mana);
    }

    #[test]
    fn test_spawn_does_not_share_state_with_template() {
        let template = goblin();
        let mut snapshot = template.spawn();
        snapshot.take_damage(499);
        assert_eq!(template.stats.current_health, 250);
        assert_eq!(template.stats.max_health, 500);
    }
}
