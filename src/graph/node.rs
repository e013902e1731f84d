//! Node types for the dependency graph.
//!
//! A node represents a module in the dependency hierarchy rooted on the
//! project under analysis. The project itself is the single [`ConsumerNode`];
//! every dependency (in-repository module or external binary) is a
//! [`ProducerNode`].

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::parser::{Component, SourceFile};

/// The project under analysis. It "consumes" its dependencies.
#[derive(Debug, Clone)]
pub struct ConsumerNode {
    /// Stable identity (e.g. the project path, ":app").
    pub identifier: String,
    /// Class names the project itself references.
    pub classes: BTreeSet<String>,
}

/// A dependency. May be a project or an external binary. It "produces"
/// capabilities for use by the project under analysis.
#[derive(Debug, Clone)]
pub struct ProducerNode {
    /// Stable identity (project path or `group:name` coordinate).
    pub identifier: String,
    /// Class names this dependency declares.
    pub classes: BTreeSet<String>,
    /// Source file descriptors this dependency declares.
    pub source_files: Vec<SourceFile>,
    /// Constant names this dependency declares, flattened across all
    /// declaring types.
    pub constants: BTreeSet<String>,
    /// Whether this dependency only contributes compile-time-visible
    /// annotations.
    pub compile_only: bool,
    /// Whether this dependency registers a security provider.
    pub security_provider: bool,
}

/// A vertex in the [`DependencyGraph`](crate::graph::DependencyGraph).
///
/// Equality and hashing are defined solely on the identifier: two nodes with
/// the same identifier are the same vertex even if their variants or payloads
/// differ. The graph relies on this to treat a dependency re-encountered via
/// another resolution path as the same vertex.
///
/// # Example
///
/// ```rust
/// use depscope::graph::Node;
/// use std::collections::BTreeSet;
///
/// let consumer = Node::consumer(":app", BTreeSet::new());
/// let producer = Node::producer(":app", None);
/// assert_eq!(consumer, producer); // same identifier, same vertex
/// ```
#[derive(Debug, Clone)]
pub enum Node {
    /// The project under analysis.
    Consumer(ConsumerNode),
    /// A dependency of the project.
    Producer(ProducerNode),
}

impl Node {
    /// Creates the consumer vertex with the set of classes the project uses.
    pub fn consumer(identifier: impl Into<String>, classes: BTreeSet<String>) -> Self {
        Node::Consumer(ConsumerNode {
            identifier: identifier.into(),
            classes,
        })
    }

    /// Creates a producer vertex from an optional component-description
    /// record.
    ///
    /// When no record is available for the identifier, all metadata defaults
    /// to empty/false. Constant names are flattened from the record's
    /// per-declaring-type grouping into one set.
    pub fn producer(identifier: impl Into<String>, component: Option<&Component>) -> Self {
        let node = match component {
            Some(component) => ProducerNode {
                identifier: identifier.into(),
                classes: component.classes.clone(),
                source_files: component.source_files.clone(),
                constants: component
                    .constant_fields
                    .values()
                    .flatten()
                    .cloned()
                    .collect(),
                compile_only: component.compile_only_annotations,
                security_provider: component.security_provider,
            },
            None => ProducerNode {
                identifier: identifier.into(),
                classes: BTreeSet::new(),
                source_files: Vec::new(),
                constants: BTreeSet::new(),
                compile_only: false,
                security_provider: false,
            },
        };
        Node::Producer(node)
    }

    /// Returns the stable identity of this vertex.
    pub fn identifier(&self) -> &str {
        match self {
            Node::Consumer(n) => &n.identifier,
            Node::Producer(n) => &n.identifier,
        }
    }

    /// Returns true if this is the consumer vertex.
    pub fn is_consumer(&self) -> bool {
        matches!(self, Node::Consumer(_))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    fn classes(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equality_is_identifier_only() {
        let consumer = Node::consumer(":app", classes(&["com.foo.Bar"]));
        let producer = Node::producer(":app", None);
        assert_eq!(consumer, producer);

        let other = Node::producer(":other", None);
        assert_ne!(consumer, other);
    }

    #[test]
    fn test_hash_collapses_variants() {
        let mut set = HashSet::new();
        set.insert(Node::consumer(":app", BTreeSet::new()));
        set.insert(Node::producer(":app", None));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_producer_without_component_defaults() {
        let node = Node::producer("org.test:lib", None);
        match node {
            Node::Producer(p) => {
                assert!(p.classes.is_empty());
                assert!(p.source_files.is_empty());
                assert!(p.constants.is_empty());
                assert!(!p.compile_only);
                assert!(!p.security_provider);
            }
            Node::Consumer(_) => panic!("expected a producer"),
        }
    }

    #[test]
    fn test_producer_flattens_constants() {
        let mut constant_fields = BTreeMap::new();
        constant_fields.insert("com.foo.A".to_string(), classes(&["X", "Y"]));
        constant_fields.insert("com.foo.B".to_string(), classes(&["Z"]));

        let component = Component {
            identifier: "org.test:lib".to_string(),
            classes: classes(&["com.foo.A", "com.foo.B"]),
            source_files: Vec::new(),
            constant_fields,
            compile_only_annotations: true,
            security_provider: false,
        };

        let node = Node::producer("org.test:lib", Some(&component));
        match node {
            Node::Producer(p) => {
                assert_eq!(p.constants, classes(&["X", "Y", "Z"]));
                assert_eq!(p.classes.len(), 2);
                assert!(p.compile_only);
            }
            Node::Consumer(_) => panic!("expected a producer"),
        }
    }

    #[test]
    fn test_display_is_identifier() {
        let node = Node::producer("org.test:lib", None);
        assert_eq!(format!("{}", node), "org.test:lib");
    }
}
