//! Configuration for the Relator

use serde::{Deserialize, Serialize};

/// Default cap on how many generations an ancestor search climbs
pub const MAX_GENERATIONS_TO_RELATE: usize = 100;

/// Configuration for the Relator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatorConfig {
    /// Hard cap on ancestor search depth
    ///
    /// Guards against malformed input where a person is their own ancestor.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,
}

fn default_max_generations() -> usize {
    MAX_GENERATIONS_TO_RELATE
}

impl RelatorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_generations == 0 {
            return Err("max_generations must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for RelatorConfig {
    fn default() -> Self {
        Self {
            max_generations: MAX_GENERATIONS_TO_RELATE,
        }
    }
}
