//! Workspace-wide constants.

/// Separator between segments of an attribute key path (`"a.b.c"`).
pub const DEFAULT_KEY_PATH_SEPARATOR: &str = ".";

/// Environment variable read by [`crate::tracing::init_tracing`].
pub const LOG_ENV_VAR: &str = "KVDAG_LOG";

/// Filter directive used when `KVDAG_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "kvdag=info";

/// Project-level config file name, looked up in the root passed to `KvdagConfig::load`.
pub const PROJECT_CONFIG_FILE: &str = "kvdag.toml";
