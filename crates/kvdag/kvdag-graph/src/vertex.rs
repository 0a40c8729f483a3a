//! Vertex handles and the borrowed query view over one vertex.

use std::collections::BTreeSet;
use std::fmt;

use kvdag_core::{AttributeMap, Filter, GraphError, GraphId};
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef as _;
use petgraph::Direction;

use crate::edge::{EdgeId, EdgeRef};
use crate::graph::Graph;
use crate::traversal::{self, reachability};

/// A set of vertices, ordered by creation within a graph.
pub type VertexSet = BTreeSet<VertexId>;

/// Handle to a vertex: the issuing graph's identity plus the arena slot.
///
/// Equality is identity. Handles are only created by [`Graph::new_vertex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    graph: GraphId,
    index: NodeIndex,
}

impl VertexId {
    pub(crate) fn new(graph: GraphId, index: NodeIndex) -> Self {
        Self { graph, index }
    }

    /// Identity of the graph that issued this handle.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    pub(crate) fn index(&self) -> NodeIndex {
        self.index
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index.index())
    }
}

/// Anything that can stand in for a vertex when linking or comparing.
pub trait AsVertex {
    fn as_vertex(&self) -> VertexId;
}

impl AsVertex for VertexId {
    fn as_vertex(&self) -> VertexId {
        *self
    }
}

impl AsVertex for VertexRef<'_> {
    fn as_vertex(&self) -> VertexId {
        self.id
    }
}

impl<T: AsVertex + ?Sized> AsVertex for &T {
    fn as_vertex(&self) -> VertexId {
        (**self).as_vertex()
    }
}

/// Read-only view of one vertex, borrowed from its graph.
#[derive(Clone, Copy)]
pub struct VertexRef<'g> {
    graph: &'g Graph,
    id: VertexId,
}

impl<'g> VertexRef<'g> {
    pub(crate) fn new(graph: &'g Graph, id: VertexId) -> Self {
        Self { graph, id }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// This vertex's own attributes, without anything inherited.
    pub fn attributes(&self) -> &'g AttributeMap {
        &self.graph.node(self.id.index()).attributes
    }

    /// Outgoing edges, in creation order.
    pub fn edges(&self) -> Vec<EdgeRef<'g>> {
        let mut indices: Vec<_> = self
            .graph
            .inner
            .edges_directed(self.id.index(), Direction::Outgoing)
            .map(|e| e.id())
            .collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|index| EdgeRef::new(self.graph, EdgeId::new(self.id.graph(), index)))
            .collect()
    }

    /// Direct parents: targets of this vertex's outgoing edges.
    pub fn parents(&self) -> VertexSet {
        self.neighbors(Direction::Outgoing)
    }

    /// Direct parents whose attribute proxy matches `filter`.
    pub fn parents_where(&self, filter: &Filter) -> VertexSet {
        self.filtered(self.neighbors(Direction::Outgoing), filter)
    }

    /// Direct children: vertices with an edge to this one.
    pub fn children(&self) -> VertexSet {
        self.neighbors(Direction::Incoming)
    }

    /// Direct children whose attribute proxy matches `filter`.
    pub fn children_where(&self, filter: &Filter) -> VertexSet {
        self.filtered(self.neighbors(Direction::Incoming), filter)
    }

    /// Self plus everything reachable through parent links.
    pub fn ancestors(&self) -> VertexSet {
        self.closure(Direction::Outgoing)
    }

    /// Ancestors (self included) whose proxy matches `filter`.
    ///
    /// Vertices that fail the filter are still walked through, so a matching
    /// grandparent behind a non-matching parent is found.
    pub fn ancestors_where(&self, filter: &Filter) -> VertexSet {
        self.filtered(self.closure(Direction::Outgoing), filter)
    }

    /// Self plus everything reachable through child links.
    pub fn descendants(&self) -> VertexSet {
        self.closure(Direction::Incoming)
    }

    /// Descendants (self included) whose proxy matches `filter`.
    pub fn descendants_where(&self, filter: &Filter) -> VertexSet {
        self.filtered(self.closure(Direction::Incoming), filter)
    }

    /// Is there a directed path of zero or more edges from this vertex to `other`?
    pub fn reachable(&self, other: impl AsVertex) -> Result<bool, GraphError> {
        let other = self.graph.check_membership(other.as_vertex())?;
        Ok(reachability::has_path(
            &self.graph.inner,
            self.id.index(),
            other.index(),
        ))
    }

    /// `other.reachable(self)`.
    pub fn reachable_from(&self, other: impl AsVertex) -> Result<bool, GraphError> {
        let other = self.graph.check_membership(other.as_vertex())?;
        Ok(reachability::has_path(
            &self.graph.inner,
            other.index(),
            self.id.index(),
        ))
    }

    /// Does this vertex's attribute proxy match `filter`?
    pub fn matches(&self, filter: &Filter) -> bool {
        self.graph.resolver().matches(self.id.index(), filter)
    }

    /// Own attributes layered over edge attributes layered over ancestors.
    ///
    /// Among sibling edges the configured [`kvdag_core::EdgePrecedence`]
    /// decides which parent wins a shared key.
    pub fn attribute_proxy(&self) -> AttributeMap {
        self.graph.resolver().resolve(self.id.index()).clone()
    }

    fn neighbors(&self, direction: Direction) -> VertexSet {
        self.graph
            .inner
            .neighbors_directed(self.id.index(), direction)
            .map(|index| VertexId::new(self.id.graph(), index))
            .collect()
    }

    fn closure(&self, direction: Direction) -> VertexSet {
        traversal::closure(&self.graph.inner, self.id.index(), direction)
            .into_iter()
            .map(|index| VertexId::new(self.id.graph(), index))
            .collect()
    }

    fn filtered(&self, candidates: VertexSet, filter: &Filter) -> VertexSet {
        if filter.is_empty() {
            return candidates;
        }
        let mut resolver = self.graph.resolver();
        candidates
            .into_iter()
            .filter(|v| resolver.matches(v.index(), filter))
            .collect()
    }
}

impl fmt::Debug for VertexRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexRef")
            .field("id", &self.id)
            .field("attributes", self.attributes())
            .finish()
    }
}

impl fmt::Display for VertexRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
