//! TurnScheduler - tick-based actor selection
//!
//! Each tick walks the combatants in registration order, adds each one's
//! attack speed to its readiness, and selects the first whose readiness
//! crosses the threshold. The scan breaks on the first match: combatants
//! after the selected one gain nothing that tick, which is the tie-break
//! (lowest registration index wins within a tick). Selection subtracts the
//! threshold instead of zeroing, so overflow carries into the next turn.
//! While an actor is selected ticking is paused; `end_turn` resumes it.

use super::combatant::Combatant;
use crate::stats::CombatantStats;
use crate::types::{CombatantId, Faction};
use serde::{Deserialize, Serialize};

/// Readiness a combatant must accumulate to take a turn
pub const READINESS_THRESHOLD: i64 = 10_000;

/// Single-threaded cooperative turn scheduler
///
/// Driven by an external cadence: the caller issues `tick` until it
/// returns an actor, lets that actor resolve its action, then calls
/// `end_turn`. Stopping the cadence is the only form of cancellation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnScheduler {
    combatants: Vec<Combatant>,
    active: Option<CombatantId>,
    next_id: u32,
}

impl TurnScheduler {
    pub fn new() -> Self {
        TurnScheduler {
            combatants: Vec::new(),
            active: None,
            next_id: 0,
        }
    }

    /// Register a combatant; readiness starts at 0
    ///
    /// Registration order is the scheduler's stable iteration order.
    pub fn add_combatant(
        &mut self,
        name: impl Into<String>,
        faction: Faction,
        stats: CombatantStats,
    ) -> CombatantId {
        let id = CombatantId(self.next_id);
        self.next_id += 1;
        self.combatants
            .push(Combatant::new(id, name.into(), faction, stats));
        id
    }

    /// Drop a combatant from scheduling; clears the active actor if it was
    /// the one removed
    pub fn remove_combatant(&mut self, id: CombatantId) -> Option<Combatant> {
        if self.active == Some(id) {
            self.active = None;
        }
        let index = self.combatants.iter().position(|c| c.id == id)?;
        Some(self.combatants.remove(index))
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| c.id == id)
    }

    /// The combatant currently mid-turn, if any
    pub fn active_combatant(&self) -> Option<CombatantId> {
        self.active
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Advance readiness by one tick and select an actor if one crosses the
    /// threshold
    ///
    /// No-op while an actor is mid-turn. Returns the newly selected actor,
    /// or None when the tick completed without a selection.
    pub fn tick(&mut self) -> Option<CombatantId> {
        if self.active.is_some() {
            return None;
        }

        for combatant in &mut self.combatants {
            combatant.readiness += combatant.stats.attack_speed as i64;

            if combatant.readiness >= READINESS_THRESHOLD {
                combatant.readiness -= READINESS_THRESHOLD;
                self.active = Some(combatant.id);
                tracing::debug!(
                    id = combatant.id.0,
                    name = %combatant.name,
                    carry = combatant.readiness,
                    "turn started"
                );
                return self.active;
            }
        }
        None
    }

    /// Signal that the active actor finished its turn; ticking resumes
    pub fn end_turn(&mut self) {
        if let Some(id) = self.active.take() {
            tracing::debug!(id = id.0, "turn ended");
        }
    }

    /// Ticks until `id` would take a turn from its current readiness
    ///
    /// None means never: a combatant with non-positive attack speed cannot
    /// reach the threshold.
    pub fn ticks_to_turn(&self, id: CombatantId) -> Option<u64> {
        let combatant = self.combatant(id)?;
        estimate_ticks(combatant)
    }

    /// Combatants ordered by ascending estimated ticks-until-turn
    ///
    /// Pure query: no readiness changes. The sort is stable, so equal
    /// estimates keep registration order; "never" combatants sort last.
    pub fn predict_order(&self) -> Vec<CombatantId> {
        let mut order: Vec<(CombatantId, u64)> = self
            .combatants
            .iter()
            .map(|c| (c.id, estimate_ticks(c).unwrap_or(u64::MAX)))
            .collect();
        order.sort_by_key(|(_, ticks)| *ticks);
        order.into_iter().map(|(id, _)| id).collect()
    }

    /// All combatants of `faction`, in registration order
    pub fn by_faction(&self, faction: Faction) -> Vec<&Combatant> {
        self.combatants
            .iter()
            .filter(|c| c.faction == faction)
            .collect()
    }
}

/// Ceiling of remaining readiness over speed; None when speed is
/// non-positive (the division is never attempted)
fn estimate_ticks(combatant: &Combatant) -> Option<u64> {
    let speed = combatant.stats.attack_speed as i64;
    if speed <= 0 {
        return None;
    }
    let remaining = (READINESS_THRESHOLD - combatant.readiness).max(0);
    Some(((remaining + speed - 1) / speed) as u64)
}
