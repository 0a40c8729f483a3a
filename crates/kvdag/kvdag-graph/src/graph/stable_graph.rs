//! petgraph::StableGraph storage with vertex and edge weight types.
//!
//! Edges point from a vertex to one of its parents, so `Outgoing` adjacency
//! is the parent relation and `Incoming` adjacency is the children relation.
//! Both lists are maintained by the single `add_edge` call on the arena.

use kvdag_core::AttributeMap;
use petgraph::stable_graph::StableGraph;
use petgraph::Directed;

/// Weight of a vertex: its own attributes.
#[derive(Debug, Clone, Default)]
pub struct VertexNode {
    pub attributes: AttributeMap,
}

/// Weight of an edge: attributes local to the edge.
#[derive(Debug, Clone, Default)]
pub struct EdgeWeight {
    pub attributes: AttributeMap,
}

/// The underlying directed graph type.
pub type DagStableGraph = StableGraph<VertexNode, EdgeWeight, Directed>;
