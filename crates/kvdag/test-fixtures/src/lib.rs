//! Test fixture loader for key-value DAG scenarios.
//!
//! A scenario names its vertices, lists the edges between them and records
//! the closures, reachability answers and attribute proxies a correct graph
//! must produce. Integration tests replay scenarios against `kvdag-graph`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a graph scenario from `graphs/<name>.json`.
pub fn load_graph(name: &str) -> GraphFixture {
    load_fixture(&format!("graphs/{name}.json"))
}

/// List all graph scenarios.
pub fn list_graphs() -> Vec<PathBuf> {
    let dir = fixtures_root().join("graphs");
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// A complete graph scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphFixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub vertices: Vec<VertexFixture>,
    #[serde(default)]
    pub edges: Vec<EdgeFixture>,
    #[serde(default)]
    pub expectations: Expectations,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VertexFixture {
    pub name: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, Value>,
}

/// An edge from `from` to its parent `to`.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeFixture {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReachabilityCase {
    pub from: String,
    pub to: String,
    pub expected: bool,
}

/// What the built graph must answer. Sets are lists of vertex names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Expectations {
    pub parents: BTreeMap<String, Vec<String>>,
    pub children: BTreeMap<String, Vec<String>>,
    pub ancestors: BTreeMap<String, Vec<String>>,
    pub descendants: BTreeMap<String, Vec<String>>,
    pub reachable: Vec<ReachabilityCase>,
    pub proxies: BTreeMap<String, serde_json::Map<String, Value>>,
    pub rejected_edges: Vec<EdgeFixture>,
}
