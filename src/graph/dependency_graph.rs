//! Dependency graph implementation.
//!
//! Provides a mutable, simple (no parallel edges) directed graph keyed by
//! [`Node`] identity, with edge-count and in-degree bookkeeping, reversal,
//! and two serialization forms. Insertion order is preserved across vertices
//! and within each adjacency set. With inspiration from the digraph in
//! Sedgewick & Wayne's *Algorithms*.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use super::node::Node;

/// Errors raised by graph queries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    /// A query named a vertex that is not in the graph on the relevant side.
    /// Never defaulted to zero or empty: querying an unknown vertex is a
    /// caller bug.
    #[error("node {0} is not in the graph")]
    MissingNode(String),
}

/// A directed graph of dependency relationships.
///
/// Edges point from the dependent to its dependency. The graph does not
/// support parallel edges: re-adding an existing edge is a no-op for the
/// edge count and in-degrees. The graph may contain cycles; no acyclicity
/// is assumed or enforced.
///
/// The adjacency map and the in-degree map are independent: a vertex has an
/// adjacency entry once it appears as an edge source (or is registered via
/// [`add_node`](Self::add_node)), and an in-degree entry once it appears as
/// an edge target. [`adj`](Self::adj) and
/// [`outdegree`](Self::outdegree) fail for vertices never used as a source;
/// [`indegree`](Self::indegree) fails for vertices never used as a target.
///
/// # Example
///
/// ```rust
/// use depscope::graph::{DependencyGraph, Node};
///
/// let mut graph = DependencyGraph::new();
/// let app = Node::producer(":app", None);
/// let lib = Node::producer("org.test:lib", None);
///
/// graph.add_edge(app.clone(), lib.clone());
/// graph.add_edge(app.clone(), lib.clone()); // no-op, not a parallel edge
///
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.outdegree(&app).unwrap(), 1);
/// assert_eq!(graph.indegree(&lib).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    edge_count: usize,
    adj: IndexMap<Node, IndexSet<Node>>,
    in_degree: IndexMap<Node, usize>,
}

impl DependencyGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from a complete adjacency mapping.
    ///
    /// Every edge is inserted through [`add_edge`](Self::add_edge), so the
    /// result is identical to incremental construction. Keys with an empty
    /// adjacency set are preserved as vertices.
    pub fn from_map(map: &IndexMap<Node, IndexSet<Node>>) -> Self {
        let mut graph = Self::new();
        for (from, tos) in map {
            graph.add_node(from.clone());
            for to in tos {
                graph.add_edge(from.clone(), to.clone());
            }
        }
        graph
    }

    /// Returns the number of distinct vertices present in the adjacency
    /// map, as edge sources or via [`add_node`](Self::add_node).
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Registers `node` as a vertex, creating an empty adjacency entry if
    /// absent.
    ///
    /// Leaf vertices never appear as an edge source, so without
    /// registration they would not be counted by
    /// [`node_count`](Self::node_count). Idempotent: re-registering an
    /// existing vertex keeps its adjacency set and payload untouched.
    pub fn add_node(&mut self, node: Node) {
        self.adj.entry(node).or_default();
    }

    /// Returns the number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds the directed edge from→to to this digraph.
    ///
    /// Ensures `from` has an adjacency entry, creating it if absent. If the
    /// edge is genuinely new, increments `to`'s in-degree and the edge
    /// counter; otherwise the call is a silent no-op. The first node
    /// inserted for an identifier wins: later inserts with the same
    /// identifier do not replace its payload.
    pub fn add_edge(&mut self, from: Node, to: Node) {
        let added = self.adj.entry(from).or_default().insert(to.clone());
        if added {
            *self.in_degree.entry(to).or_insert(0) += 1;
            self.edge_count += 1;
        }
    }

    /// Returns the vertices adjacent from `from`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingNode`] unless `from` has been inserted
    /// as an edge source.
    pub fn adj(&self, from: &Node) -> Result<&IndexSet<Node>, GraphError> {
        self.adj.get(from).ok_or_else(|| missing_node(from))
    }

    /// Returns the number of edges incident from `from`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingNode`] unless `from` has been inserted
    /// as an edge source.
    pub fn outdegree(&self, from: &Node) -> Result<usize, GraphError> {
        self.adj
            .get(from)
            .map(IndexSet::len)
            .ok_or_else(|| missing_node(from))
    }

    /// Returns the number of edges incident to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingNode`] unless `to` has been the target
    /// of at least one edge.
    pub fn indegree(&self, to: &Node) -> Result<usize, GraphError> {
        self.in_degree
            .get(to)
            .copied()
            .ok_or_else(|| missing_node(to))
    }

    /// Returns a snapshot of the full adjacency mapping.
    ///
    /// The snapshot is independent of the live graph: mutating it cannot
    /// corrupt the graph's degree bookkeeping. Nodes are immutable values,
    /// so cloning the mapping is sufficient.
    pub fn map(&self) -> IndexMap<Node, IndexSet<Node>> {
        self.adj.clone()
    }

    /// Returns the reverse of this digraph as a new, independent graph.
    ///
    /// Every edge u→v becomes v→u. The receiver is not mutated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depscope::graph::{DependencyGraph, Node};
    ///
    /// let mut graph = DependencyGraph::new();
    /// let a = Node::producer(":a", None);
    /// let b = Node::producer(":b", None);
    /// graph.add_edge(a.clone(), b.clone());
    ///
    /// let reversed = graph.reverse();
    /// assert_eq!(reversed.outdegree(&b).unwrap(), 1);
    /// assert_eq!(reversed.indegree(&a).unwrap(), 1);
    /// ```
    pub fn reverse(&self) -> DependencyGraph {
        let mut reverse = DependencyGraph::new();
        for (from, tos) in &self.adj {
            for to in tos {
                reverse.add_edge(to.clone(), from.clone());
            }
        }
        reverse
    }

    /// Renders the graph in the DOT graph-description language.
    ///
    /// One `"from" -> "to";` statement per edge, grouped by source vertex in
    /// insertion order. Only identifiers and edges are emitted, no payload
    /// data. Suitable for Graphviz and similar tooling.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph G {\n\n");
        for (from, tos) in &self.adj {
            for to in tos {
                out.push_str(&format!(
                    "  \"{}\" -> \"{}\";\n",
                    from.identifier(),
                    to.identifier()
                ));
            }
        }
        out.push('}');
        out
    }
}

/// Renders the vertex count, the edge count, and then each vertex's
/// adjacency list, one line per vertex, in insertion order.
impl fmt::Display for DependencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.node_count(),
            self.edge_count
        )?;
        for (node, edges) in &self.adj {
            let targets: Vec<&str> = edges.iter().map(Node::identifier).collect();
            writeln!(f, "{} >> {}", node, targets.join(", "))?;
        }
        Ok(())
    }
}

fn missing_node(node: &Node) -> GraphError {
    GraphError::MissingNode(node.identifier().to_string())
}
