//! Combatant stats - snapshots and the templates they are spawned from

mod snapshot;
mod template;

pub use snapshot::{CombatantStats, ElementalDamageBonus};
pub use template::UnitTemplate;
