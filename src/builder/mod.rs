//! Builder module: converts a resolution result into a dependency graph.
//!
//! The [`GraphBuilder`] consumes the externally resolved dependency tree and
//! the component-description index (see [`crate::parser`]) and produces one
//! [`DependencyGraph`](crate::graph::DependencyGraph) per invocation.

mod graph_builder;

pub use graph_builder::GraphBuilder;
