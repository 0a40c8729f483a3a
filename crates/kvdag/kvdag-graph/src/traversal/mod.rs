//! Transitive closures over the parent and child relations.
//!
//! Walks use an explicit stack and a visited set keyed by vertex index, so
//! stack usage does not grow with the depth of the graph. Diamonds are
//! reported once.

pub mod reachability;

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;
use tracing::trace;

use crate::graph::stable_graph::DagStableGraph;

/// Reflexive-transitive closure from `start`.
///
/// `Direction::Outgoing` follows edges to parents (ancestors),
/// `Direction::Incoming` follows them back to children (descendants).
/// The start vertex is always part of the result.
pub fn closure(graph: &DagStableGraph, start: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        for next in graph.neighbors_directed(node, direction) {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }

    trace!(start = start.index(), visited = order.len(), ?direction, "closure walk");
    order
}
