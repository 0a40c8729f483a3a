//! Attribute proxy configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_KEY_PATH_SEPARATOR;
use crate::errors::ConfigError;

/// Which sibling edge wins when two parents contribute the same key.
///
/// Outgoing edges have no natural order, so the proxy merge pins one:
/// edges are visited in creation order and the first one merged wins
/// (`FirstCreated`), or the order is reversed (`LastCreated`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePrecedence {
    #[default]
    FirstCreated,
    LastCreated,
}

impl EdgePrecedence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstCreated => "first_created",
            Self::LastCreated => "last_created",
        }
    }
}

impl fmt::Display for EdgePrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgePrecedence {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_created" => Ok(Self::FirstCreated),
            "last_created" => Ok(Self::LastCreated),
            other => Err(ConfigError::InvalidValue {
                field: "proxy.edge_precedence".to_string(),
                message: format!("unknown edge precedence '{other}', expected 'first_created' or 'last_created'"),
            }),
        }
    }
}

/// Configuration for attribute proxy computation and filter lookups.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Sibling edge precedence. Default: first_created.
    pub edge_precedence: Option<EdgePrecedence>,
    /// Separator between key path segments. Default: ".".
    pub key_path_separator: Option<String>,
}

impl ProxyConfig {
    /// Returns the effective edge precedence, defaulting to `FirstCreated`.
    pub fn effective_edge_precedence(&self) -> EdgePrecedence {
        self.edge_precedence.unwrap_or_default()
    }

    /// Returns the effective key path separator, defaulting to `"."`.
    pub fn effective_key_path_separator(&self) -> &str {
        self.key_path_separator
            .as_deref()
            .unwrap_or(DEFAULT_KEY_PATH_SEPARATOR)
    }
}
