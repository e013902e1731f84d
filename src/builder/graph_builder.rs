//! Graph construction from a resolved-dependency tree.

use std::collections::{BTreeSet, HashSet};

use crate::graph::{DependencyGraph, Node};
use crate::parser::{ComponentIdentity, ComponentIndex, IdentityError, ResolvedComponent};

/// Builds a [`DependencyGraph`] from a resolution result.
///
/// The builder walks the tree depth-first from the root. The root becomes
/// the single consumer vertex, carrying the used-classes set verbatim; every
/// other component becomes a producer vertex carrying whatever metadata the
/// component index has for its identifier (or empty/false defaults). A
/// visited set of identifiers, scoped to one build invocation, prevents
/// re-expanding components reached via more than one path: diamond-shaped
/// trees and accidental cycles in the input terminate without duplicate
/// edges or runaway recursion. A consequence of skip-if-visited is that a
/// node's metadata is fixed by whichever path reaches it first. Every
/// visited component is registered as a vertex, so leaves count toward
/// [`node_count`](crate::graph::DependencyGraph::node_count) even though
/// they never source an edge.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use depscope::builder::GraphBuilder;
/// use depscope::parser::{parse_resolution_str, ComponentIndex};
///
/// let root = parse_resolution_str(r#"{
///     "id": ":app",
///     "dependencies": [{"id": "org.test:lib-a:1.0"}]
/// }"#).unwrap();
///
/// let graph = GraphBuilder::new(&root, &ComponentIndex::default(), BTreeSet::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub struct GraphBuilder<'a> {
    root: &'a ResolvedComponent,
    components: &'a ComponentIndex,
    used_classes: BTreeSet<String>,
    graph: DependencyGraph,
    visited: HashSet<String>,
}

impl<'a> GraphBuilder<'a> {
    /// Creates a builder for one resolution result.
    pub fn new(
        root: &'a ResolvedComponent,
        components: &'a ComponentIndex,
        used_classes: BTreeSet<String>,
    ) -> Self {
        Self {
            root,
            components,
            used_classes,
            graph: DependencyGraph::new(),
            visited: HashSet::new(),
        }
    }

    /// Consumes the builder and returns the constructed graph, covering
    /// every vertex and edge reachable from the root.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unrecognized`] if the resolver reported a
    /// component identity of an unrecognized shape. No partial result is
    /// salvaged.
    pub fn build(mut self) -> Result<DependencyGraph, IdentityError> {
        let root = self.root;
        self.traverse(root, true)?;
        Ok(self.graph)
    }

    fn traverse(
        &mut self,
        component: &ResolvedComponent,
        is_consumer: bool,
    ) -> Result<(), IdentityError> {
        let identifier = ComponentIdentity::parse(&component.id)?.identifier();

        // While most nodes root a subgraph, only the first is the consumer.
        let node = if is_consumer {
            Node::consumer(identifier.as_str(), self.used_classes.clone())
        } else {
            Node::producer(identifier.as_str(), self.components.get(&identifier))
        };

        // Don't visit the same node more than once.
        if !self.visited.insert(identifier) {
            return Ok(());
        }
        self.graph.add_node(node.clone());

        for dependency in &component.dependencies {
            let dep_identifier = ComponentIdentity::parse(&dependency.id)?.identifier();
            let dep_node =
                Node::producer(dep_identifier.as_str(), self.components.get(&dep_identifier));

            self.graph.add_edge(node.clone(), dep_node);
            self.traverse(dependency, false)?;
        }

        Ok(())
    }
}
