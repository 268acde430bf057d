//! Environment variable overrides, applied after file loading.

use std::collections::HashMap;

use tracing::debug;

use crate::schema::{DeployTarget, ScanConfig};

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut ScanConfig) {
    apply_overrides_from(config, &std::env::vars().collect());
}

/// Apply overrides from a provided map (useful for testing).
pub fn apply_overrides_from(config: &mut ScanConfig, env: &HashMap<String, String>) {
    if let Some(target) = env.get("LABELSCAN_TARGET") {
        match target.to_ascii_lowercase().as_str() {
            "web" => config.target = DeployTarget::Web,
            "device" => config.target = DeployTarget::Device,
            other => debug!(value = other, "ignoring unknown LABELSCAN_TARGET"),
        }
    }
    if let Some(url) = env.get("LABELSCAN_WEB_URL") {
        config.web_base_url = url.clone();
    }
    if let Some(url) = env.get("LABELSCAN_DEVICE_URL") {
        config.device_base_url = url.clone();
    }
    if let Some(secs) = env.get("LABELSCAN_TIMEOUT_SECS") {
        if let Ok(secs) = secs.parse() {
            config.request_timeout_secs = secs;
        }
    }
    if let Some(level) = env.get("RUST_LOG") {
        config.log_level = level.clone();
    }
    if let Some(dir) = env.get("LABELSCAN_LOG_DIR") {
        config.log_dir = dir.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn overrides_target_and_urls() {
        let mut config = ScanConfig::default();
        apply_overrides_from(
            &mut config,
            &env(&[
                ("LABELSCAN_TARGET", "device"),
                ("LABELSCAN_DEVICE_URL", "http://10.0.0.5:8000"),
            ]),
        );
        assert_eq!(config.target, DeployTarget::Device);
        assert_eq!(config.base_url(), "http://10.0.0.5:8000");
    }

    #[test]
    fn unknown_target_is_ignored() {
        let mut config = ScanConfig::default();
        apply_overrides_from(&mut config, &env(&[("LABELSCAN_TARGET", "desktop")]));
        assert_eq!(config.target, DeployTarget::Web);
    }

    #[test]
    fn non_numeric_timeout_is_ignored() {
        let mut config = ScanConfig::default();
        apply_overrides_from(&mut config, &env(&[("LABELSCAN_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn empty_env_changes_nothing() {
        let mut config = ScanConfig::default();
        apply_overrides_from(&mut config, &HashMap::new());
        assert_eq!(config.base_url(), "http://localhost:8000");
    }
}
