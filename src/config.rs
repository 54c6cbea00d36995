use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ConfigError;

/// payoff horizon, 100 years
pub const MAX_MONTHS: u32 = 1200;

/// unit attached to suggested payment amounts
pub const DEFAULT_SUGGESTION_UNIT: &str = "$";

/// simulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// months simulated before giving up
    pub max_months: u32,
    pub suggestion_unit: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_months: MAX_MONTHS,
            suggestion_unit: DEFAULT_SUGGESTION_UNIT.to_string(),
        }
    }
}

impl SimulatorConfig {
    /// parse from toml, missing keys fall back to defaults
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SimulatorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// load from a toml file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_months == 0 {
            return Err(ConfigError::Invalid {
                message: "max_months must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
