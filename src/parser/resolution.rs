//! The resolved-dependency tree and component identity normalization.
//!
//! The resolution result is an opaque, rooted tree produced by the build
//! tool's dependency resolver: each node carries a raw component identity
//! and the list of resolved children. Identities come in exactly two shapes
//! (in-repository project paths and external module coordinates), and both
//! normalize to a single identifier string before any lookup or graph
//! insertion. Any other shape is a contract violation by the resolver.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::components::ParseResult;

/// Error raised when the resolver reports an identity of an unrecognized
/// shape. Fatal: the resolver is expected to never produce one.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("unrecognized component identity: {0:?}")]
    Unrecognized(String),
}

/// A normalized component identity.
///
/// Raw identities are either project paths with a leading colon (`":app"`)
/// or module coordinates of the form `group:name:version`
/// (`"org.test:lib-a:1.0"`). Module identities drop the version when
/// normalized, so every version of an artifact maps to the same vertex.
///
/// # Example
///
/// ```
/// use depscope::parser::ComponentIdentity;
///
/// let project = ComponentIdentity::parse(":app").unwrap();
/// assert_eq!(project.identifier(), ":app");
///
/// let module = ComponentIdentity::parse("org.test:lib-a:1.0").unwrap();
/// assert_eq!(module.identifier(), "org.test:lib-a");
///
/// assert!(ComponentIdentity::parse("lib-a").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentIdentity {
    /// An in-repository project, identified by its path.
    Project { path: String },
    /// An external published artifact, identified by its coordinates.
    Module {
        group: String,
        name: String,
        version: String,
    },
}

impl ComponentIdentity {
    /// Parses a raw identity string reported by the resolver.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unrecognized`] for any shape other than the
    /// two recognized kinds.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        if raw.starts_with(':') {
            return Ok(ComponentIdentity::Project {
                path: raw.to_string(),
            });
        }

        let parts: Vec<&str> = raw.split(':').collect();
        match parts.as_slice() {
            [group, name, version]
                if !group.is_empty() && !name.is_empty() && !version.is_empty() =>
            {
                Ok(ComponentIdentity::Module {
                    group: group.to_string(),
                    name: name.to_string(),
                    version: version.to_string(),
                })
            }
            _ => Err(IdentityError::Unrecognized(raw.to_string())),
        }
    }

    /// Returns the normalized identifier used for metadata lookups and as
    /// the vertex identity in the graph.
    pub fn identifier(&self) -> String {
        match self {
            ComponentIdentity::Project { path } => path.clone(),
            ComponentIdentity::Module { group, name, .. } => format!("{}:{}", group, name),
        }
    }
}

impl fmt::Display for ComponentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// One node of the resolved-dependency tree.
///
/// The same component may legitimately appear in several places of the tree
/// (diamond dependencies); the graph builder deduplicates by identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedComponent {
    /// Raw component identity, to be normalized via
    /// [`ComponentIdentity::parse`].
    pub id: String,

    /// Resolved child edges of this component.
    #[serde(default)]
    pub dependencies: Vec<ResolvedComponent>,
}

/// Parses a resolution result from a JSON string.
///
/// # Example
///
/// ```
/// use depscope::parser::parse_resolution_str;
///
/// let json = r#"{
///     "id": ":app",
///     "dependencies": [{"id": "org.test:lib-a:1.0"}]
/// }"#;
/// let root = parse_resolution_str(json).unwrap();
/// assert_eq!(root.id, ":app");
/// assert_eq!(root.dependencies.len(), 1);
/// ```
pub fn parse_resolution_str(content: &str) -> ParseResult<ResolvedComponent> {
    let root: ResolvedComponent = serde_json::from_str(content)?;
    Ok(root)
}

/// Parses a resolution result from a file path.
pub fn parse_resolution_file(path: &Path) -> ParseResult<ResolvedComponent> {
    let content = fs::read_to_string(path)?;
    parse_resolution_str(&content)
}
