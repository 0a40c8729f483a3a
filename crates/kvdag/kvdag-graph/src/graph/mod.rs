//! The graph container: owns every vertex and edge of one DAG and is the only
//! place where vertices are created and edges are inserted.

pub mod dag_enforcement;
pub mod stable_graph;

use kvdag_core::config::{KvdagConfig, ProxyConfig};
use kvdag_core::{AttributeMap, Filter, GraphError, GraphId};
use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use tracing::{debug, warn};

use self::stable_graph::{DagStableGraph, EdgeWeight, VertexNode};
use crate::edge::{EdgeId, EdgeRef};
use crate::proxy::ProxyResolver;
use crate::vertex::{AsVertex, VertexId, VertexRef, VertexSet};

/// An in-memory key-value DAG.
///
/// Mutation goes through `&mut Graph`, so a graph has exactly one writer at a
/// time. Queries go through the borrowed [`VertexRef`] and [`EdgeRef`] views.
#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    proxy_config: ProxyConfig,
    pub(crate) inner: DagStableGraph,
}

impl Graph {
    /// Create an empty graph with default configuration.
    pub fn new() -> Self {
        Self::with_config(&KvdagConfig::default())
    }

    pub fn with_config(config: &KvdagConfig) -> Self {
        Self {
            id: GraphId::new(),
            proxy_config: config.proxy.clone(),
            inner: DagStableGraph::default(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn proxy_config(&self) -> &ProxyConfig {
        &self.proxy_config
    }

    /// Create a vertex holding `attributes` and register it in this graph.
    pub fn new_vertex(&mut self, attributes: AttributeMap) -> VertexId {
        let index = self.inner.add_node(VertexNode { attributes });
        let id = VertexId::new(self.id, index);
        debug!(graph = %self.id, vertex = %id, "vertex created");
        id
    }

    /// Create an edge from `from` to its new parent `to`.
    ///
    /// Fails with [`GraphError::CrossGraph`] if either vertex belongs to
    /// another graph, and with [`GraphError::CycleDetected`] if `to` can
    /// already reach `from` (self-loops included). On failure the graph is
    /// unchanged.
    pub fn edge(
        &mut self,
        from: impl AsVertex,
        to: impl AsVertex,
        attributes: AttributeMap,
    ) -> Result<EdgeId, GraphError> {
        let from = self.check_membership(from.as_vertex())?;
        let to = self.check_membership(to.as_vertex())?;

        if dag_enforcement::would_create_cycle(&self.inner, from.index(), to.index()) {
            warn!(graph = %self.id, from = %from, to = %to, "edge rejected: would create a cycle");
            return Err(GraphError::CycleDetected {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let index = self
            .inner
            .add_edge(from.index(), to.index(), EdgeWeight { attributes });
        debug!(graph = %self.id, from = %from, to = %to, "edge created");
        Ok(EdgeId::new(self.id, index))
    }

    /// Borrow a query view of `id`.
    pub fn vertex(&self, id: impl AsVertex) -> Result<VertexRef<'_>, GraphError> {
        let id = self.check_membership(id.as_vertex())?;
        Ok(VertexRef::new(self, id))
    }

    /// Borrow a view of the edge `id`.
    pub fn edge_ref(&self, id: EdgeId) -> Result<EdgeRef<'_>, GraphError> {
        if id.graph() != self.id {
            return Err(GraphError::CrossGraph {
                expected: self.id,
                found: id.graph(),
            });
        }
        Ok(EdgeRef::new(self, id))
    }

    /// Mutable access to a vertex's own attributes.
    pub fn attributes_mut(&mut self, id: impl AsVertex) -> Result<&mut AttributeMap, GraphError> {
        let id = self.check_membership(id.as_vertex())?;
        Ok(&mut self.node_mut(id.index()).attributes)
    }

    /// All vertices whose attribute proxy matches `filter`.
    pub fn vertices(&self, filter: &Filter) -> VertexSet {
        let mut resolver = self.resolver();
        self.inner
            .node_indices()
            .filter(|&index| resolver.matches(index, filter))
            .map(|index| VertexId::new(self.id, index))
            .collect()
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.inner
            .edge_indices()
            .map(move |index| EdgeRef::new(self, EdgeId::new(self.id, index)))
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Strongly connected components with more than one vertex.
    /// Always empty for a graph built through [`Graph::edge`].
    pub fn find_cycles(&self) -> Vec<Vec<VertexId>> {
        dag_enforcement::find_cycles(&self.inner)
            .into_iter()
            .map(|scc| {
                scc.into_iter()
                    .map(|index| VertexId::new(self.id, index))
                    .collect()
            })
            .collect()
    }

    /// A fresh proxy resolver using this graph's configuration.
    pub fn resolver(&self) -> ProxyResolver<'_> {
        ProxyResolver::new(self)
    }

    pub(crate) fn check_membership(&self, id: VertexId) -> Result<VertexId, GraphError> {
        if id.graph() == self.id {
            Ok(id)
        } else {
            warn!(graph = %self.id, other = %id.graph(), "cross-graph vertex rejected");
            Err(GraphError::CrossGraph {
                expected: self.id,
                found: id.graph(),
            })
        }
    }

    // Handles are only issued by this graph and nothing is ever removed, so
    // an index that passed `check_membership` is always present.
    pub(crate) fn node(&self, index: NodeIndex) -> &VertexNode {
        &self.inner[index]
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut VertexNode {
        &mut self.inner[index]
    }

    pub(crate) fn edge_weight(&self, index: EdgeIndex) -> &EdgeWeight {
        &self.inner[index]
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
