//! # kvdag-graph
//!
//! An in-memory key-value DAG. Vertices carry attribute maps; an attribute
//! lookup at a vertex sees everything contributed by its ancestors, with
//! nearer contributions overriding farther ones.
//!
//! ```
//! use kvdag_graph::{AttributeMap, Graph};
//! use serde_json::json;
//!
//! let mut graph = Graph::new();
//! let base = graph.new_vertex(AttributeMap::from_iter([("os", json!("linux")), ("tier", json!("gold"))]));
//! let host = graph.new_vertex(AttributeMap::from_iter([("tier", json!("silver"))]));
//! graph.edge(host, base, AttributeMap::new()).unwrap();
//!
//! // base -> host would close a cycle, so it's rejected:
//! assert!(graph.edge(base, host, AttributeMap::new()).is_err());
//!
//! let proxy = graph.vertex(host).unwrap().attribute_proxy();
//! assert_eq!(proxy["os"], json!("linux"));
//! assert_eq!(proxy["tier"], json!("silver"));
//! ```

pub mod edge;
pub mod graph;
pub mod ordering;
pub mod proxy;
pub mod traversal;
pub mod vertex;

pub use edge::{EdgeId, EdgeRef};
pub use graph::Graph;
pub use kvdag_core::{AttributeMap, Filter, GraphError, Matcher};
pub use proxy::ProxyResolver;
pub use vertex::{AsVertex, VertexId, VertexRef, VertexSet};
