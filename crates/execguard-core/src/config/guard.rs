use super::EnforcementFlag;
use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for an execution-phase guard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Whether restricted-phase violations are reported.
    pub enabled: bool,
}

impl GuardConfig {
    /// Configuration with enforcement switched on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Load configuration from a `.toml` or `.json` file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| CoreError::invalid(format!("Invalid TOML: {e}")))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| CoreError::invalid(format!("Invalid JSON: {e}")))?,
            _ => return Err(CoreError::invalid("Unsupported file format")),
        };

        config.validate()?;
        debug!(path = %path.display(), enabled = config.enabled, "Loaded guard configuration");
        Ok(config)
    }

    /// Merge with another configuration; non-default values from `other` win.
    pub fn merge_with(&mut self, other: &Self) {
        if other.enabled != Self::default().enabled {
            self.enabled = other.enabled;
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// The enforcement flag this configuration selects.
    pub fn flag(&self) -> EnforcementFlag {
        EnforcementFlag::new(self.enabled)
    }
}
