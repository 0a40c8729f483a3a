//! # kvdag-core
//!
//! Foundation crate for the key-value DAG.
//! Defines attribute maps, filters, identifiers, errors, config, tracing setup
//! and constants. `kvdag-graph` builds the graph on top of these.

pub mod attributes;
pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use attributes::{AttributeMap, Filter, Matcher};
pub use config::{EdgePrecedence, KvdagConfig};
pub use errors::{ConfigError, FilterError, GraphError, KvdagError, KvdagErrorCode, KvdagResult};
pub use types::GraphId;
