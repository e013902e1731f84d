//! JSON export implementation.
//!
//! Exports the graph as a structured record keyed by node identifier: a
//! summary, a node table with per-node metadata, and the adjacency mapping
//! in insertion order.

use super::Exporter;
use crate::graph::{DependencyGraph, Node};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    vertices: usize,
    edges: usize,
}

/// Serializable node for JSON output.
#[derive(Serialize)]
struct JsonNode {
    identifier: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    constants: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    source_files: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    compile_only: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    security_provider: bool,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    summary: JsonSummary,
    nodes: Vec<JsonNode>,
    graph: IndexMap<String, Vec<String>>,
}

impl From<&Node> for JsonNode {
    fn from(node: &Node) -> Self {
        match node {
            Node::Consumer(c) => JsonNode {
                identifier: c.identifier.clone(),
                kind: "consumer",
                classes: c.classes.iter().cloned().collect(),
                constants: Vec::new(),
                source_files: Vec::new(),
                compile_only: false,
                security_provider: false,
            },
            Node::Producer(p) => JsonNode {
                identifier: p.identifier.clone(),
                kind: "producer",
                classes: p.classes.iter().cloned().collect(),
                constants: p.constants.iter().cloned().collect(),
                source_files: p.source_files.iter().map(|f| f.path.clone()).collect(),
                compile_only: p.compile_only,
                security_provider: p.security_provider,
            },
        }
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        let map = graph.map();

        // Node table in insertion order: sources first, then targets that
        // never appear as a source (the leaves).
        let mut nodes: IndexMap<&str, JsonNode> = IndexMap::new();
        for (from, tos) in &map {
            nodes.entry(from.identifier()).or_insert_with(|| from.into());
            for to in tos {
                nodes.entry(to.identifier()).or_insert_with(|| to.into());
            }
        }

        let adjacency: IndexMap<String, Vec<String>> = map
            .iter()
            .map(|(from, tos)| {
                (
                    from.identifier().to_string(),
                    tos.iter().map(|to| to.identifier().to_string()).collect(),
                )
            })
            .collect();

        let export = JsonExport {
            summary: JsonSummary {
                vertices: graph.node_count(),
                edges: graph.edge_count(),
            },
            nodes: nodes.into_values().collect(),
            graph: adjacency,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::parser::{parse_components_str, parse_resolution_str, ComponentIndex};
    use std::collections::BTreeSet;

    fn diamond_graph() -> DependencyGraph {
        let root = parse_resolution_str(
            r#"{
                "id": ":app",
                "dependencies": [
                    {
                        "id": "org.test:lib-a:1.0",
                        "dependencies": [{"id": "org.test:lib-c:1.0"}]
                    },
                    {
                        "id": "org.test:lib-b:1.0",
                        "dependencies": [{"id": "org.test:lib-c:1.0"}]
                    }
                ]
            }"#,
        )
        .unwrap();
        let components = ComponentIndex::new(
            parse_components_str(
                r#"[{"identifier": "org.test:lib-c", "classes": ["org.test.C"], "security_provider": true}]"#,
            )
            .unwrap(),
        );
        let used: BTreeSet<String> = ["com.foo.Bar".to_string()].into_iter().collect();

        GraphBuilder::new(&root, &components, used).build().unwrap()
    }

    #[test]
    fn test_json_export_summary_and_adjacency() {
        let graph = diamond_graph();
        let mut output = Vec::new();

        JsonExporter.export(&graph, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(parsed["summary"]["vertices"], 4);
        assert_eq!(parsed["summary"]["edges"], 4);

        let app_targets = parsed["graph"][":app"].as_array().unwrap();
        assert_eq!(app_targets.len(), 2);
        assert_eq!(app_targets[0], "org.test:lib-a");
        assert_eq!(
            parsed["graph"]["org.test:lib-b"].as_array().unwrap()[0],
            "org.test:lib-c"
        );
    }

    #[test]
    fn test_json_export_node_table() {
        let graph = diamond_graph();
        let mut output = Vec::new();

        JsonExporter.export(&graph, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        let nodes = parsed["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0]["identifier"], ":app");
        assert_eq!(nodes[0]["kind"], "consumer");
        assert_eq!(nodes[0]["classes"][0], "com.foo.Bar");

        let lib_c = nodes
            .iter()
            .find(|n| n["identifier"] == "org.test:lib-c")
            .unwrap();
        assert_eq!(lib_c["kind"], "producer");
        assert_eq!(lib_c["security_provider"], true);

        // Empty payload fields are skipped entirely.
        let lib_a = nodes
            .iter()
            .find(|n| n["identifier"] == "org.test:lib-a")
            .unwrap();
        assert!(lib_a.get("classes").is_none());
        assert!(lib_a.get("security_provider").is_none());
    }

    #[test]
    fn test_json_is_valid_for_empty_graph() {
        let graph = DependencyGraph::new();
        let mut output = Vec::new();

        JsonExporter.export(&graph, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed["summary"]["vertices"], 0);
        assert!(parsed["nodes"].as_array().unwrap().is_empty());
    }
}
