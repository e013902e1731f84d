//! Graph module for dependency relationship modeling.
//!
//! This module provides the [`Node`] vertex model and the
//! [`DependencyGraph`] struct for building and querying dependency
//! relationships as a directed graph.
//!
//! # Example
//!
//! ```rust
//! use depscope::graph::{DependencyGraph, Node};
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_edge(Node::producer(":app", None), Node::producer("org.test:lib", None));
//!
//! assert_eq!(graph.node_count(), 1);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod dependency_graph;
mod node;

pub use dependency_graph::{DependencyGraph, GraphError};
pub use node::{ConsumerNode, Node, ProducerNode};
