//! Turn scheduling - readiness accumulation and actor selection

mod combatant;
mod turn;

pub use combatant::Combatant;
pub use turn::{TurnScheduler, READINESS_THRESHOLD};
