//! Error handling for the key-value DAG.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod filter_error;
pub mod graph_error;
pub mod kvdag_error;

pub use config_error::ConfigError;
pub use error_code::KvdagErrorCode;
pub use filter_error::FilterError;
pub use graph_error::GraphError;
pub use kvdag_error::{KvdagError, KvdagResult};
