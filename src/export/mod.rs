//! Export functionality for the dependency graph.
//!
//! This module provides exporters for the graph's serialization forms:
//! JSON (adjacency snapshot plus node metadata), DOT (edge list for
//! visualization tooling), and the plain-text summary.

pub mod dot;
pub mod json;

use crate::graph::DependencyGraph;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON format - machine-readable, keyed by node identifier
    Json,
    /// DOT format - edge list for Graphviz and similar tools
    Dot,
    /// Plain-text summary - vertex/edge counts and adjacency lists
    Summary,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "dot" | "gv" => Ok(ExportFormat::Dot),
            "summary" | "txt" => Ok(ExportFormat::Summary),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, dot, summary",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Dot => write!(f, "dot"),
            ExportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the graph to the given writer.
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()>;
}

/// Exports the plain-text summary form (the graph's `Display` rendering).
pub struct SummaryExporter;

impl Exporter for SummaryExporter {
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", graph)
    }
}

/// Export a graph in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    graph: &DependencyGraph,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(graph, writer),
        ExportFormat::Dot => dot::DotExporter.export(graph, writer),
        ExportFormat::Summary => SummaryExporter.export(graph, writer),
    }
}

/// Export a graph to a string.
pub fn export_to_string(format: ExportFormat, graph: &DependencyGraph) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
