//! DOT export implementation.
//!
//! Emits the graph's edge list in the DOT graph-description language, one
//! quoted-identifier statement per edge, for consumption by Graphviz and
//! similar visualization tools. No payload data is emitted.

use super::Exporter;
use crate::graph::DependencyGraph;
use std::io::{self, Write};

/// DOT exporter implementation.
pub struct DotExporter;

impl Exporter for DotExporter {
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", graph.to_dot())
    }
}
