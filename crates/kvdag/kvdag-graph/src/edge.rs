//! Edge handles and the borrowed view over one edge.

use std::fmt;

use kvdag_core::{AttributeMap, GraphId};
use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::graph::Graph;
use crate::vertex::{VertexId, VertexRef};

/// Handle to an edge. Two edges between the same pair of vertices are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    graph: GraphId,
    index: EdgeIndex,
}

impl EdgeId {
    pub(crate) fn new(graph: GraphId, index: EdgeIndex) -> Self {
        Self { graph, index }
    }

    pub fn graph(&self) -> GraphId {
        self.graph
    }

    pub(crate) fn index(&self) -> EdgeIndex {
        self.index
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.index.index())
    }
}

/// Read-only view of one edge. Edges are immutable once created.
#[derive(Clone, Copy)]
pub struct EdgeRef<'g> {
    graph: &'g Graph,
    id: EdgeId,
}

impl<'g> EdgeRef<'g> {
    pub(crate) fn new(graph: &'g Graph, id: EdgeId) -> Self {
        Self { graph, id }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The vertex that owns this edge.
    pub fn from_vertex(&self) -> VertexRef<'g> {
        VertexRef::new(self.graph, VertexId::new(self.id.graph(), self.endpoints().0))
    }

    /// The parent this edge points to.
    pub fn to_vertex(&self) -> VertexRef<'g> {
        VertexRef::new(self.graph, VertexId::new(self.id.graph(), self.endpoints().1))
    }

    /// Attributes local to this edge.
    pub fn attributes(&self) -> &'g AttributeMap {
        &self.graph.edge_weight(self.id.index()).attributes
    }

    /// This edge's attributes merged over the target's full attribute proxy.
    pub fn attribute_proxy(&self) -> AttributeMap {
        self.graph.resolver().edge_proxy(self.id.index())
    }

    fn endpoints(&self) -> (NodeIndex, NodeIndex) {
        // Edges are never removed, so the endpoints always exist.
        self.graph
            .inner
            .edge_endpoints(self.id.index())
            .unwrap_or_else(|| unreachable!("edge {} has no endpoints", self.id))
    }
}

impl fmt::Debug for EdgeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = self.endpoints();
        f.debug_struct("EdgeRef")
            .field("id", &self.id)
            .field("from", &from.index())
            .field("to", &to.index())
            .field("attributes", self.attributes())
            .finish()
    }
}
