//! Unit template configuration loading

use super::ConfigError;
use crate::stats::UnitTemplate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for unit template configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsConfig {
    pub units: Vec<UnitTemplate>,
}

fn validate(units: &[UnitTemplate]) -> Result<(), ConfigError> {
    for unit in units {
        if unit.stats.max_health <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "unit '{}' has non-positive max_health",
                unit.id
            )));
        }
    }
    Ok(())
}

/// Load unit templates from a TOML file
pub fn load_unit_configs(path: &Path) -> Result<HashMap<String, UnitTemplate>, ConfigError> {
    let config: UnitsConfig = super::load_toml(path)?;
    validate(&config.units)?;
    Ok(config
        .units
        .into_iter()
        .map(|unit| (unit.id.clone(), unit))
        .collect())
}

/// Parse unit templates from a TOML string
pub fn parse_unit_configs(content: &str) -> Result<HashMap<String, UnitTemplate>, ConfigError> {
    let config: UnitsConfig = super::parse_toml(content)?;
    validate(&config.units)?;
    Ok(config
        .units
        .into_iter()
        .map(|unit| (unit.id.clone(), unit))
        .collect())
}

/// The unit templates shipped with the engine
pub fn default_units() -> HashMap<String, UnitTemplate> {
    let toml = include_str!("../../config/units.toml");
    parse_unit_configs(toml).expect("bundled units.toml is valid")
}
