//! Skill system - authored skill data and effect dispatch

mod data;
mod effect;
mod scaling;

pub use data::SkillData;
pub use effect::{EffectOutcome, SkillEffect};
pub use scaling::LevelScaling;
