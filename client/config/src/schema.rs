//! Configuration schema, typed for serde TOML deserialization with
//! default-filling for every field.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::validation::ConfigError;

/// Which deployment context the client runs in. The analysis backend is
/// reached at a different address from a browser than from a physical or
/// emulated device, and the choice is static configuration, not runtime
/// discovery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployTarget {
    #[default]
    Web,
    Device,
}

/// Root configuration for the LabelScan client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub target: DeployTarget,
    pub web_base_url: String,
    pub device_base_url: String,
    /// Bounded request timeout in seconds; 0 disables the bound.
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_dir: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: DeployTarget::Web,
            web_base_url: "http://localhost:8000".to_string(),
            device_base_url: "http://10.0.2.2:8000".to_string(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}

impl ScanConfig {
    /// The base URL selected by the deployment target.
    pub fn base_url(&self) -> &str {
        match self.target {
            DeployTarget::Web => &self.web_base_url,
            DeployTarget::Device => &self.device_base_url,
        }
    }

    /// Request timeout as a duration, `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

/// Read and parse a TOML config file.
pub fn load_file(path: &Path) -> Result<ScanConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
