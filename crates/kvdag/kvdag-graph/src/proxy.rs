//! Attribute proxy computation.
//!
//! The proxy of a vertex is its own attributes, then each outgoing edge's
//! proxy merged in, where an edge's proxy is the edge's attributes merged over
//! the proxy of its target. Merges keep the receiver's value, so the result
//! is: own attributes beat edge attributes beat ancestor attributes.
//!
//! Sibling edges are merged in creation order (`EdgePrecedence::FirstCreated`,
//! the earliest edge wins a shared key) or in reverse creation order
//! (`EdgePrecedence::LastCreated`).

use std::collections::HashMap;

use kvdag_core::config::EdgePrecedence;
use kvdag_core::{AttributeMap, Filter};
use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef as _;
use petgraph::Direction;

use crate::graph::stable_graph::EdgeWeight;
use crate::graph::Graph;
use crate::vertex::VertexRef;

/// Computes attribute proxies, memoising every vertex it resolves.
///
/// A shared ancestor is resolved once per resolver, which keeps filtered
/// closures over diamond-heavy graphs linear in the number of edges walked.
/// A resolver borrows the graph, so it can never observe a mutation.
pub struct ProxyResolver<'g> {
    graph: &'g Graph,
    precedence: EdgePrecedence,
    memo: HashMap<NodeIndex, AttributeMap>,
}

impl<'g> ProxyResolver<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            precedence: graph.proxy_config().effective_edge_precedence(),
            memo: HashMap::new(),
        }
    }

    /// The proxy of the vertex at `index`.
    pub(crate) fn resolve(&mut self, index: NodeIndex) -> &AttributeMap {
        let graph = self.graph;
        // Post-order walk: a vertex is composed once all of its parents are.
        let mut stack = vec![(index, false)];
        while let Some((node, expanded)) = stack.pop() {
            if self.memo.contains_key(&node) {
                continue;
            }
            if expanded {
                let proxy = self.compose(node);
                self.memo.insert(node, proxy);
                continue;
            }
            stack.push((node, true));
            for parent in graph.inner.neighbors_directed(node, Direction::Outgoing) {
                if !self.memo.contains_key(&parent) {
                    stack.push((parent, false));
                }
            }
        }
        &self.memo[&index]
    }

    /// The proxy of the vertex behind `vertex`.
    pub fn proxy_of(&mut self, vertex: VertexRef<'_>) -> &AttributeMap {
        self.resolve(vertex.id().index())
    }

    /// An edge's attributes merged over its target's proxy.
    pub(crate) fn edge_proxy(&mut self, edge: EdgeIndex) -> AttributeMap {
        let graph = self.graph;
        let target = match graph.inner.edge_endpoints(edge) {
            Some((_, target)) => target,
            None => return AttributeMap::new(),
        };
        let own = graph.edge_weight(edge).attributes.clone();
        own.merged(self.resolve(target))
    }

    /// Does the proxy at `index` match `filter`?
    pub(crate) fn matches(&mut self, index: NodeIndex, filter: &Filter) -> bool {
        if filter.is_empty() {
            return true;
        }
        let graph = self.graph;
        let separator = graph.proxy_config().effective_key_path_separator();
        filter.matches_with(self.resolve(index), separator)
    }

    // Parents of `node` are all memoised when this runs.
    fn compose(&self, node: NodeIndex) -> AttributeMap {
        let mut proxy = self.graph.node(node).attributes.clone();
        for (weight, target) in self.ordered_edges(node) {
            let inherited = weight.attributes.clone().merged(&self.memo[&target]);
            proxy.merge(&inherited);
        }
        proxy
    }

    fn ordered_edges(&self, node: NodeIndex) -> Vec<(&'g EdgeWeight, NodeIndex)> {
        let graph: &'g Graph = self.graph;
        let mut edges: Vec<_> = graph
            .inner
            .edges_directed(node, Direction::Outgoing)
            .map(|e| (e.id(), e.weight(), e.target()))
            .collect();
        // Edge indices grow monotonically because edges are never removed.
        edges.sort_unstable_by_key(|(id, _, _)| *id);
        if self.precedence == EdgePrecedence::LastCreated {
            edges.reverse();
        }
        edges
            .into_iter()
            .map(|(_, weight, target)| (weight, target))
            .collect()
    }
}
