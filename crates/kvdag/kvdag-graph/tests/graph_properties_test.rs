//! Property tests for kvdag-graph over randomly built DAGs.

use std::cmp::Ordering;

use proptest::prelude::*;

use kvdag_graph::{AttributeMap, Graph, GraphError, VertexId};

/// Build a graph with `n` vertices, attempting every edge in `edges`.
/// Attempts that would close a cycle are rejected by the graph itself.
fn build_random_dag(n: usize, edges: &[(usize, usize)]) -> (Graph, Vec<VertexId>) {
    let mut graph = Graph::new();
    let ids: Vec<VertexId> = (0..n)
        .map(|i| graph.new_vertex(AttributeMap::from_iter([("n", i)])))
        .collect();
    for &(from, to) in edges {
        match graph.edge(ids[from], ids[to], AttributeMap::new()) {
            Ok(_) | Err(GraphError::CycleDetected { .. }) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    (graph, ids)
}

// Strategy to generate random edge attempts for a graph of size n.
fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 3)
}

// =============================================================================
// Acyclicity survives arbitrary insertion sequences
// =============================================================================
proptest! {
    #[test]
    fn no_cycles_after_random_insertions(edges in edge_strategy(20)) {
        let (graph, ids) = build_random_dag(20, &edges);
        prop_assert!(graph.find_cycles().is_empty());

        // No vertex is a proper ancestor of itself.
        for &id in &ids {
            let v = graph.vertex(id).unwrap();
            for parent in v.parents() {
                prop_assert!(!graph.vertex(parent).unwrap().reachable(id).unwrap());
            }
        }
    }
}

// =============================================================================
// Reachability is reflexive; closures contain their start vertex
// =============================================================================
proptest! {
    #[test]
    fn reachability_is_reflexive(edges in edge_strategy(12)) {
        let (graph, ids) = build_random_dag(12, &edges);
        for &id in &ids {
            let v = graph.vertex(id).unwrap();
            prop_assert!(v.reachable(id).unwrap());
            prop_assert!(v.ancestors().contains(&id));
            prop_assert!(v.descendants().contains(&id));
        }
    }
}

// =============================================================================
// Reachability is antisymmetric
// =============================================================================
proptest! {
    #[test]
    fn reachability_is_antisymmetric(edges in edge_strategy(12)) {
        let (graph, ids) = build_random_dag(12, &edges);
        for &a in &ids {
            let a_ref = graph.vertex(a).unwrap();
            for &b in &ids {
                if a != b && a_ref.reachable(b).unwrap() {
                    prop_assert!(!graph.vertex(b).unwrap().reachable(a).unwrap());
                    prop_assert_eq!(a_ref.compare(b).unwrap(), Ordering::Less);
                }
            }
        }
    }
}

// =============================================================================
// Parent/child and ancestor/descendant duality
// =============================================================================
proptest! {
    #[test]
    fn parents_and_children_are_dual(edges in edge_strategy(15)) {
        let (graph, ids) = build_random_dag(15, &edges);
        for &a in &ids {
            let a_ref = graph.vertex(a).unwrap();
            for &b in &ids {
                let b_ref = graph.vertex(b).unwrap();
                prop_assert_eq!(a_ref.parents().contains(&b), b_ref.children().contains(&a));
                prop_assert_eq!(a_ref.ancestors().contains(&b), b_ref.descendants().contains(&a));
                prop_assert_eq!(a_ref.ancestors().contains(&b), a_ref.reachable(b).unwrap());
            }
        }
    }
}

// =============================================================================
// Rejected insertions never change the graph
// =============================================================================
proptest! {
    #[test]
    fn rejected_edge_changes_nothing(edges in edge_strategy(10), from in 0_usize..10, to in 0_usize..10) {
        let (mut graph, ids) = build_random_dag(10, &edges);
        // Fall back to a self-loop when the random pair would be accepted.
        let closes_path = graph.vertex(ids[to]).unwrap().reachable(ids[from]).unwrap();
        let to = if closes_path { to } else { from };

        let edge_count = graph.edge_count();
        let parents = graph.vertex(ids[from]).unwrap().parents();
        let children = graph.vertex(ids[to]).unwrap().children();

        let result = graph.edge(ids[from], ids[to], AttributeMap::new());
        prop_assert!(
            matches!(result, Err(GraphError::CycleDetected { .. })),
            "expected a cycle rejection, got {:?}",
            result
        );
        prop_assert_eq!(graph.edge_count(), edge_count);
        prop_assert_eq!(graph.vertex(ids[from]).unwrap().parents(), parents);
        prop_assert_eq!(graph.vertex(ids[to]).unwrap().children(), children);
    }
}

// =============================================================================
// A vertex's own attributes always win in its proxy
// =============================================================================
proptest! {
    #[test]
    fn own_attributes_win_in_proxy(edges in edge_strategy(12)) {
        let (graph, ids) = build_random_dag(12, &edges);
        for (i, &id) in ids.iter().enumerate() {
            let proxy = graph.vertex(id).unwrap().attribute_proxy();
            prop_assert_eq!(&proxy["n"], &serde_json::json!(i));
        }
    }
}
