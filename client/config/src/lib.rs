//! LabelScan client configuration: deployment-target base URLs, request
//! timeout, and logging settings, loaded from an optional TOML file with
//! environment overrides.

pub mod env;
pub mod schema;
pub mod validation;

use std::path::Path;

pub use env::apply_env_overrides;
pub use schema::{DeployTarget, ScanConfig};
pub use validation::{validate, ConfigError};

/// Load configuration: file (when given) → env overrides → validation.
pub fn load(path: Option<&Path>) -> Result<ScanConfig, ConfigError> {
    let mut config = match path {
        Some(path) => schema::load_file(path)?,
        None => ScanConfig::default(),
    };
    env::apply_env_overrides(&mut config);
    validate(&config)?;
    Ok(config)
}
