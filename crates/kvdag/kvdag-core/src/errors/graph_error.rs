//! Graph construction and query errors.

use super::error_code::{self, KvdagErrorCode};
use crate::types::GraphId;

/// Precondition violations raised by graph operations.
///
/// Both variants signal a bug in the caller's graph construction. They are
/// never retried and the graph is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex belongs to graph {found}, expected graph {expected}")]
    CrossGraph { expected: GraphId, found: GraphId },

    #[error("edge {from} -> {to} would create a cycle")]
    CycleDetected { from: String, to: String },
}

impl KvdagErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CrossGraph { .. } => error_code::CROSS_GRAPH,
            Self::CycleDetected { .. } => error_code::CYCLE_DETECTED,
        }
    }
}
