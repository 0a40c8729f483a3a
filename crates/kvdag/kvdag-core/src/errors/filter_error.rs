//! Filter construction errors.

use super::error_code::{self, KvdagErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("invalid pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl KvdagErrorCode for FilterError {
    fn error_code(&self) -> &'static str {
        error_code::FILTER_ERROR
    }
}
