//! Cycle checks run before every edge insertion.

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;

use super::stable_graph::DagStableGraph;
use crate::traversal::reachability::has_path;

/// Check whether adding an edge from `source` to `target` would create a cycle.
///
/// Returns `true` if the edge must be rejected.
pub fn would_create_cycle(graph: &DagStableGraph, source: NodeIndex, target: NodeIndex) -> bool {
    // Self-loops are always cycles.
    if source == target {
        return true;
    }

    // If target can already reach source, source -> target closes the loop.
    has_path(graph, target, source)
}

/// Validate the entire graph is a DAG.
/// Returns the strongly connected components with more than one node.
pub fn find_cycles(graph: &DagStableGraph) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .collect()
}
