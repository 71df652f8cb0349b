//! Combatant - the scheduler's view of a unit

use crate::stats::CombatantStats;
use crate::types::{CombatantId, Faction};
use serde::{Deserialize, Serialize};

/// A unit tracked by the scheduler
///
/// Readiness is mutated only by [`TurnScheduler::tick`], which also
/// subtracts the threshold when this combatant is selected. Outside that
/// instant it stays below the threshold.
///
/// [`TurnScheduler::tick`]: crate::scheduler::TurnScheduler::tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub faction: Faction,
    /// Turn-order accumulator; gains `attack_speed` per tick
    pub readiness: i64,
    pub stats: CombatantStats,
}

impl Combatant {
    pub fn new(id: CombatantId, name: String, faction: Faction, stats: CombatantStats) -> Self {
        Combatant {
            id,
            name,
            faction,
            readiness: 0,
            stats,
        }
    }

    /// Readiness gained per scheduler tick
    pub fn attack_speed(&self) -> i32 {
        self.stats.attack_speed
    }
}
