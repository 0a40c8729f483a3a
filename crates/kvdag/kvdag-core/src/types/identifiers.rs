//! Graph identity.
//!
//! Every graph is stamped with a random [`GraphId`] at construction. Vertex and
//! edge handles carry the id of the graph that issued them, which is how
//! cross-graph operations are detected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one graph instance. Two graphs never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphId(Uuid);

impl GraphId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner `Uuid`.
    pub fn inner(self) -> Uuid {
        self.0
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GraphId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The short form is enough to tell graphs apart in log lines.
        let simple = self.0.simple().to_string();
        f.write_str(&simple[..8])
    }
}
