//! Skill configuration loading

use super::ConfigError;
use crate::skill::SkillData;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for skill configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    pub skills: Vec<SkillData>,
}

fn validate(skills: &[SkillData]) -> Result<(), ConfigError> {
    for skill in skills {
        if skill.max_level == 0 {
            return Err(ConfigError::ValidationError(format!(
                "skill '{}' has max_level 0; levels start at 1",
                skill.id
            )));
        }
    }
    Ok(())
}

/// Load skill configurations from a TOML file
pub fn load_skill_configs(path: &Path) -> Result<HashMap<String, SkillData>, ConfigError> {
    let config: SkillsConfig = super::load_toml(path)?;
    validate(&config.skills)?;
    Ok(config
        .skills
        .into_iter()
        .map(|skill| (skill.id.clone(), skill))
        .collect())
}

/// Parse skill configurations from a TOML string
pub fn parse_skill_configs(content: &str) -> Result<HashMap<String, SkillData>, ConfigError> {
    let config: SkillsConfig = super::parse_toml(content)?;
    validate(&config.skills)?;
    Ok(config
        .skills
        .into_iter()
        .map(|skill| (skill.id.clone(), skill))
        .collect())
}

/// The skills shipped with the engine
pub fn default_skills() -> HashMap<String, SkillData> {
    let toml = include_str!("../../config/skills.toml");
    parse_skill_configs(toml).expect("bundled skills.toml is valid")
}
