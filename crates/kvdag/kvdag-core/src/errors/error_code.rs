//! KvdagErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that callers can match on without parsing messages.
pub trait KvdagErrorCode {
    /// Returns the error code string (e.g., "CYCLE_DETECTED").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CROSS_GRAPH: &str = "CROSS_GRAPH";
pub const CYCLE_DETECTED: &str = "CYCLE_DETECTED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const FILTER_ERROR: &str = "FILTER_ERROR";
