//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, ProxyConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`KVDAG_*`)
/// 2. Project config (`kvdag.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KvdagConfig {
    pub proxy: ProxyConfig,
    pub observability: ObservabilityConfig,
}

impl KvdagConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &KvdagConfig) -> Result<(), ConfigError> {
        if let Some(ref separator) = config.proxy.key_path_separator {
            if separator.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "proxy.key_path_separator".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref filter) = config.observability.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_filter".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut KvdagConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: KvdagConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut KvdagConfig, other: &KvdagConfig) {
        // Proxy
        if other.proxy.edge_precedence.is_some() {
            base.proxy.edge_precedence = other.proxy.edge_precedence;
        }
        if other.proxy.key_path_separator.is_some() {
            base.proxy.key_path_separator = other.proxy.key_path_separator.clone();
        }

        // Observability
        if other.observability.log_filter.is_some() {
            base.observability.log_filter = other.observability.log_filter.clone();
        }
    }

    /// Apply environment variable overrides read through `lookup`.
    /// Pattern: `KVDAG_EDGE_PRECEDENCE`, `KVDAG_KEY_PATH_SEPARATOR`, `KVDAG_LOG_FILTER`.
    ///
    /// Unparsable values are ignored with a warning and the lower layer stays in effect.
    pub fn apply_env_overrides<F>(config: &mut KvdagConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("KVDAG_EDGE_PRECEDENCE") {
            match val.parse() {
                Ok(v) => config.proxy.edge_precedence = Some(v),
                Err(e) => tracing::warn!(error = %e, "ignoring KVDAG_EDGE_PRECEDENCE"),
            }
        }
        if let Some(val) = lookup("KVDAG_KEY_PATH_SEPARATOR") {
            config.proxy.key_path_separator = Some(val);
        }
        if let Some(val) = lookup("KVDAG_LOG_FILTER") {
            config.observability.log_filter = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
