//! Installation configuration
//!
//! The path separator is the only setting. It is carried by an explicit
//! [`InstallConfig`] value that every entry point takes, so two callers can
//! use different separators side by side.

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_invalid};

/// Separator used when no configuration says otherwise
pub const DEFAULT_SEPARATOR: &str = ".";

/// Settings shared by the normalizer and the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Splits and joins dotted paths
    separator: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl InstallConfig {
    /// Create a configuration with a custom path separator
    pub fn new(separator: impl Into<String>) -> Result<Self> {
        let config = Self {
            separator: separator.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from YAML
    ///
    /// Missing fields take their defaults, so an empty document is valid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// The path separator
    pub fn separator(&self) -> &str {
        &self.separator
    }

    fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(config_invalid("separator must not be empty"));
        }
        Ok(())
    }
}
