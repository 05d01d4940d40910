//! Session configuration.

use crate::core::{EntityKind, Error, Result};
use crate::host::ExtensionInfo;
use crate::monitoring::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extension-wide settings used by the load/unload entry points.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Project name shown in load banners
    pub project_name: String,
    /// Extension version
    pub version: String,
    /// Vendor reported to the host
    pub vendor: String,
    /// Host API version the extension was built against
    pub api_version: String,
    /// Development mode: verbose, prefixed banners
    pub dev_mode: bool,
    /// Order in which entity kinds are registered; unload runs in reverse
    pub load_order: Vec<EntityKind>,
    /// Log settings
    pub logging: LoggingConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            project_name: "extension".to_string(),
            version: "0.1".to_string(),
            vendor: "unknown".to_string(),
            api_version: "Any".to_string(),
            dev_mode: false,
            load_order: EntityKind::ALL.to_vec(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a config for a named project.
    pub fn new(project_name: &str, version: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            version: version.to_string(),
            ..Default::default()
        }
    }

    /// Enable development mode.
    pub fn with_dev_mode(mut self) -> Self {
        self.dev_mode = true;
        self.logging = LoggingConfig::development();
        self
    }

    /// Set vendor and host API version.
    pub fn with_vendor(mut self, vendor: &str, api_version: &str) -> Self {
        self.vendor = vendor.to_string();
        self.api_version = api_version.to_string();
        self
    }

    /// Set registration order.
    pub fn with_load_order(mut self, order: &[EntityKind]) -> Self {
        self.load_order = order.to_vec();
        self
    }

    /// Identity announced to the host on load.
    pub fn extension_info(&self) -> ExtensionInfo {
        ExtensionInfo {
            name: self.project_name.clone(),
            version: self.version.clone(),
            vendor: self.vendor.clone(),
            api_version: self.api_version.clone(),
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that every kind appears exactly once in the load order.
    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(Error::Config("project_name must not be empty".to_string()));
        }
        for kind in EntityKind::ALL {
            let count = self.load_order.iter().filter(|k| **k == kind).count();
            if count != 1 {
                return Err(Error::Config(format!(
                    "load_order must list {} exactly once, found {}",
                    kind, count
                )));
            }
        }
        Ok(())
    }
}
