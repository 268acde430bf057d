//! Config validation, run once after loading and overrides.

use thiserror::Error;

use crate::schema::ScanConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Validate a loaded configuration.
pub fn validate(config: &ScanConfig) -> Result<(), ConfigError> {
    check_base_url("web_base_url", &config.web_base_url)?;
    check_base_url("device_base_url", &config.device_base_url)?;
    if config.log_level.is_empty() {
        return Err(ConfigError::Invalid("log_level must not be empty".into()));
    }
    Ok(())
}

fn check_base_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must not be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Invalid(format!(
            "{field} must be an http(s) URL, got {url:?}"
        )));
    }
    Ok(())
}
