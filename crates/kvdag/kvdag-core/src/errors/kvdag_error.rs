//! Top-level error aggregating every subsystem error via `From` conversions.

use super::{ConfigError, FilterError, GraphError, KvdagErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum KvdagError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),
}

impl KvdagErrorCode for KvdagError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Filter(e) => e.error_code(),
        }
    }
}

pub type KvdagResult<T> = Result<T, KvdagError>;
