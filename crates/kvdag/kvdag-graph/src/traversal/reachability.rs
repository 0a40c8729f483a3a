//! Directed reachability checks.

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::Dfs;

use crate::graph::stable_graph::DagStableGraph;

/// Can we reach `to` from `from` by following edges toward parents?
/// A vertex always reaches itself.
pub fn has_path(graph: &DagStableGraph, from: NodeIndex, to: NodeIndex) -> bool {
    let mut dfs = Dfs::new(graph, from);
    while let Some(node) = dfs.next(graph) {
        if node == to {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::stable_graph::{EdgeWeight, VertexNode};

    #[test]
    fn path_follows_edge_direction_only() {
        let mut graph = DagStableGraph::default();
        let a = graph.add_node(VertexNode::default());
        let b = graph.add_node(VertexNode::default());
        let c = graph.add_node(VertexNode::default());
        graph.add_edge(a, b, EdgeWeight::default());
        graph.add_edge(b, c, EdgeWeight::default());

        assert!(has_path(&graph, a, c));
        assert!(has_path(&graph, a, a));
        assert!(!has_path(&graph, c, a));
    }
}
