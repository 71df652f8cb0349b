//! Matchup table configuration loading
//!
//! An authored table is a list of overrides layered on top of the all-1.0
//! base; pairs not listed keep the default multiplier.

use super::ConfigError;
use crate::matchup::MatchupMatrix;
use crate::types::ElementType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One authored (attacker, defender) override
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub attacker: ElementType,
    pub defender: ElementType,
    pub multiplier: f64,
}

/// Container for matchup overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupsConfig {
    pub matchups: Vec<MatchupEntry>,
}

fn build(config: MatchupsConfig) -> Result<MatchupMatrix, ConfigError> {
    for entry in &config.matchups {
        if entry.multiplier < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "matchup {:?} vs {:?} has negative multiplier {}",
                entry.attacker, entry.defender, entry.multiplier
            )));
        }
    }
    let mut matrix = MatchupMatrix::new();
    for entry in config.matchups {
        matrix.set(entry.attacker, entry.defender, entry.multiplier);
    }
    Ok(matrix)
}

/// Load a matchup table from a TOML file
pub fn load_matchup_config(path: &Path) -> Result<MatchupMatrix, ConfigError> {
    let config: MatchupsConfig = super::load_toml(path)?;
    build(config)
}

/// Parse a matchup table from a TOML string
pub fn parse_matchup_config(content: &str) -> Result<MatchupMatrix, ConfigError> {
    let config: MatchupsConfig = super::parse_toml(content)?;
    build(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matchup_toml() {
        let toml = r#"
[[matchups]]
attacker = "water"
defender = "fire"
multiplier = 2.0

[[matchups]]
attacker = "fire"
defender = "water"
multiplier = 0.25
"#;
        let mut matrix = parse_matchup_config(toml).unwrap();
        assert!((matrix.get(ElementType::Water, ElementType::Fire) - 2.0).abs() < f64::EPSILON);
        assert!((matrix.get(ElementType::Fire, ElementType::Water) - 0.25).abs() < f64::EPSILON);
        // Unlisted pairs stay at the default
        assert!((matrix.get(ElementType::Wind, ElementType::Earth) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let toml = r#"
[[matchups]]
attacker = "dark"
defender = "light"
multiplier = -1.0
"#;
        let err = parse_matchup_config(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
