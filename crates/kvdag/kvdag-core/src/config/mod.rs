//! Configuration system for the key-value DAG.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod kvdag_config;
pub mod observability_config;
pub mod proxy_config;

pub use kvdag_config::KvdagConfig;
pub use observability_config::ObservabilityConfig;
pub use proxy_config::{EdgePrecedence, ProxyConfig};
