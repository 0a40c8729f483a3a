//! Integration tests for kvdag-graph: construction, closures, reachability,
//! cycle and cross-graph rejection, attribute precedence.

use kvdag_core::errors::{error_code, KvdagErrorCode};
use kvdag_graph::{AttributeMap, Filter, Graph, GraphError, Matcher, VertexId, VertexSet};
use serde_json::json;

fn empty() -> AttributeMap {
    AttributeMap::new()
}

/// Build the diamond: v1 -> v2 -> v3, v2 -> v4.
fn diamond() -> (Graph, [VertexId; 4]) {
    let mut graph = Graph::new();
    let v1 = graph.new_vertex(empty());
    let v2 = graph.new_vertex(empty());
    let v3 = graph.new_vertex(empty());
    let v4 = graph.new_vertex(empty());
    graph.edge(v1, v2, empty()).unwrap();
    graph.edge(v2, v3, empty()).unwrap();
    graph.edge(v2, v4, empty()).unwrap();
    (graph, [v1, v2, v3, v4])
}

/// Build a linear chain of `len` vertices, each pointing at the previous one.
fn chain(graph: &mut Graph, len: usize) -> Vec<VertexId> {
    let mut ids: Vec<VertexId> = Vec::with_capacity(len);
    for i in 0..len {
        let id = graph.new_vertex(AttributeMap::from_iter([("depth", i)]));
        if let Some(&previous) = ids.last() {
            graph.edge(id, previous, empty()).unwrap();
        }
        ids.push(id);
    }
    ids
}

// =============================================================================
// Diamond scenario
// =============================================================================
#[test]
fn diamond_closures_and_adjacency() {
    let (graph, [v1, v2, v3, v4]) = diamond();

    assert_eq!(
        graph.vertex(v1).unwrap().ancestors(),
        VertexSet::from([v1, v2, v3, v4])
    );
    assert_eq!(
        graph.vertex(v3).unwrap().descendants(),
        VertexSet::from([v1, v2, v3])
    );
    assert_eq!(graph.vertex(v2).unwrap().children(), VertexSet::from([v1]));
    assert_eq!(graph.vertex(v2).unwrap().parents(), VertexSet::from([v3, v4]));
}

#[test]
fn diamond_reachability() {
    let (graph, [v1, v2, v3, v4]) = diamond();
    let v2_ref = graph.vertex(v2).unwrap();

    assert!(v2_ref.reachable(v3).unwrap());
    assert!(!v2_ref.reachable(v1).unwrap());
    assert!(!graph.vertex(v3).unwrap().reachable(v4).unwrap());
    assert!(v2_ref.reachable_from(v1).unwrap());
}

#[test]
fn leaf_has_no_parents_and_root_has_no_children() {
    let (graph, [v1, _, v3, _]) = diamond();
    assert!(graph.vertex(v3).unwrap().parents().is_empty());
    assert!(graph.vertex(v1).unwrap().children().is_empty());
}

// =============================================================================
// Reachability is reflexive
// =============================================================================
#[test]
fn every_vertex_reaches_itself() {
    let (graph, ids) = diamond();
    for id in ids {
        let v = graph.vertex(id).unwrap();
        assert!(v.reachable(id).unwrap());
        assert!(v.reachable_from(id).unwrap());
    }
}

// =============================================================================
// Cycle rejection leaves no trace
// =============================================================================
#[test]
fn closing_a_path_is_rejected_without_mutation() {
    let mut graph = Graph::new();
    let ids = chain(&mut graph, 5);
    let (first, last) = (ids[0], ids[4]);

    let parents_before = graph.vertex(first).unwrap().parents();
    let children_before = graph.vertex(last).unwrap().children();
    let edges_before = graph.edge_count();

    // last reaches first, so first -> last would close the loop.
    let err = graph.edge(first, last, empty()).unwrap_err();
    assert!(matches!(err, GraphError::CycleDetected { .. }));
    assert_eq!(err.error_code(), error_code::CYCLE_DETECTED);

    assert_eq!(graph.edge_count(), edges_before);
    assert_eq!(graph.vertex(first).unwrap().parents(), parents_before);
    assert_eq!(graph.vertex(last).unwrap().children(), children_before);
    assert!(graph.find_cycles().is_empty());
}

#[test]
fn self_loop_is_a_cycle() {
    let mut graph = Graph::new();
    let v = graph.new_vertex(empty());
    assert!(matches!(
        graph.edge(v, v, empty()),
        Err(GraphError::CycleDetected { .. })
    ));
    assert!(graph.vertex(v).unwrap().parents().is_empty());
}

#[test]
fn redundant_forward_edge_is_allowed() {
    let mut graph = Graph::new();
    let ids = chain(&mut graph, 3);
    // ids[2] already reaches ids[0]; a shortcut is still acyclic.
    graph.edge(ids[2], ids[0], empty()).unwrap();
    assert_eq!(
        graph.vertex(ids[2]).unwrap().parents(),
        VertexSet::from([ids[0], ids[1]])
    );
}

// =============================================================================
// Cross-graph rejection
// =============================================================================
#[test]
fn vertices_from_another_graph_are_rejected() {
    let mut first = Graph::new();
    let mut second = Graph::new();
    let p = first.new_vertex(empty());
    let q = second.new_vertex(empty());

    let err = first.edge(p, q, empty()).unwrap_err();
    assert_eq!(
        err,
        GraphError::CrossGraph {
            expected: first.id(),
            found: second.id(),
        }
    );
    assert_eq!(err.error_code(), error_code::CROSS_GRAPH);

    let p_ref = first.vertex(p).unwrap();
    assert!(matches!(p_ref.reachable(q), Err(GraphError::CrossGraph { .. })));
    assert!(matches!(p_ref.reachable_from(q), Err(GraphError::CrossGraph { .. })));
    assert!(matches!(first.vertex(q), Err(GraphError::CrossGraph { .. })));
    assert!(matches!(first.attributes_mut(q), Err(GraphError::CrossGraph { .. })));
    assert_eq!(first.edge_count(), 0);
}

#[test]
fn foreign_source_vertex_is_rejected() {
    let mut first = Graph::new();
    let mut second = Graph::new();
    let p = first.new_vertex(empty());
    let q = second.new_vertex(empty());
    assert!(matches!(
        first.edge(q, p, empty()),
        Err(GraphError::CrossGraph { .. })
    ));
}

// =============================================================================
// Attribute precedence
// =============================================================================
#[test]
fn own_attribute_beats_edge_and_ancestor() {
    let mut graph = Graph::new();
    let a = graph.new_vertex(AttributeMap::from_iter([("k", 1)]));
    let b = graph.new_vertex(AttributeMap::from_iter([("k", 3)]));
    graph
        .edge(a, b, AttributeMap::from_iter([("k", 2)]))
        .unwrap();

    assert_eq!(graph.vertex(a).unwrap().attribute_proxy()["k"], json!(1));
}

#[test]
fn edge_attribute_beats_ancestor() {
    let mut graph = Graph::new();
    let a = graph.new_vertex(empty());
    let b = graph.new_vertex(AttributeMap::from_iter([("k", 3)]));
    graph
        .edge(a, b, AttributeMap::from_iter([("k", 2)]))
        .unwrap();

    assert_eq!(graph.vertex(a).unwrap().attribute_proxy()["k"], json!(2));
}

#[test]
fn nearer_ancestor_beats_farther_one() {
    let mut graph = Graph::new();
    let ids = chain(&mut graph, 4);
    graph
        .attributes_mut(ids[1])
        .unwrap()
        .insert("owner", "middle");
    graph.attributes_mut(ids[0]).unwrap().insert("owner", "root");

    let proxy = graph.vertex(ids[3]).unwrap().attribute_proxy();
    assert_eq!(proxy["depth"], json!(3));
    assert_eq!(proxy["owner"], json!("middle"));
}

#[test]
fn edge_attributes_do_not_leak_to_parent() {
    let mut graph = Graph::new();
    let a = graph.new_vertex(empty());
    let b = graph.new_vertex(empty());
    graph
        .edge(a, b, AttributeMap::from_iter([("via", "edge")]))
        .unwrap();

    assert!(graph.vertex(b).unwrap().attribute_proxy().get("via").is_none());
    assert_eq!(graph.vertex(a).unwrap().attributes().len(), 0);
}

// =============================================================================
// Filters
// =============================================================================
#[test]
fn filters_apply_to_every_closure() {
    let mut graph = Graph::new();
    let base = graph.new_vertex(AttributeMap::from_iter([("os", json!("linux"))]));
    let db = graph.new_vertex(AttributeMap::from_iter([("role", json!("db"))]));
    let web = graph.new_vertex(AttributeMap::from_iter([("role", json!("web"))]));
    graph.edge(db, base, empty()).unwrap();
    graph.edge(web, base, empty()).unwrap();

    let base_ref = graph.vertex(base).unwrap();
    let dbs = Filter::new().eq("role", "db");
    assert_eq!(base_ref.descendants_where(&dbs), VertexSet::from([db]));
    assert_eq!(base_ref.children_where(&dbs), VertexSet::from([db]));

    // The start vertex goes through the same filter as everything else.
    let linux = Filter::new().eq("os", "linux");
    assert_eq!(
        base_ref.descendants_where(&linux),
        VertexSet::from([base, db, web])
    );
    assert!(graph
        .vertex(db)
        .unwrap()
        .ancestors_where(&Filter::new().eq("role", "web"))
        .is_empty());
    assert_eq!(
        graph.vertex(db).unwrap().parents_where(&linux),
        VertexSet::from([base])
    );
}

#[test]
fn combinator_filters_on_graph() {
    let mut graph = Graph::new();
    let a = graph.new_vertex(AttributeMap::from_iter([("name", json!("db-01"))]));
    let b = graph.new_vertex(AttributeMap::from_iter([("name", json!("web-01"))]));
    let c = graph.new_vertex(AttributeMap::from_iter([("name", json!("db-02")), ("retired", json!(true))]));

    let filter = Filter::new()
        .all("name", Matcher::pattern("^db-").unwrap())
        .none("retired", Matcher::eq(true));
    assert_eq!(graph.vertices(&filter), VertexSet::from([a]));
    assert!(!graph.vertices(&filter).contains(&b));
    assert!(!graph.vertices(&filter).contains(&c));
}

// =============================================================================
// Deep graphs
// =============================================================================
#[test]
fn deep_chain_does_not_exhaust_the_stack() {
    let mut graph = Graph::new();
    let ids = chain(&mut graph, 20_000);
    let leaf = graph.vertex(ids[ids.len() - 1]).unwrap();

    assert_eq!(leaf.ancestors().len(), 20_000);
    assert!(leaf.reachable(ids[0]).unwrap());
    assert_eq!(leaf.attribute_proxy()["depth"], json!(19_999));
    assert_eq!(graph.vertex(ids[0]).unwrap().descendants().len(), 20_000);
}
