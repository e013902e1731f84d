//! Loading of the component-description index and the used-classes report.
//!
//! Both inputs are JSON lists written by earlier analysis stages. The
//! component list becomes a [`ComponentIndex`] keyed by normalized
//! dependency identifier; the used-classes list collapses to a set of class
//! names.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use super::types::{Component, UsedClass};

/// Errors that can occur while loading input files.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Lookup table from normalized dependency identifier to its
/// component-description record.
///
/// Absence of a record for an identifier is valid: the graph builder then
/// falls back to empty/false metadata. Identifiers are identity-pure: one
/// record per identifier, independent of where in the tree the dependency is
/// encountered. If the input list repeats an identifier, the last record
/// wins.
///
/// # Example
///
/// ```
/// use depscope::parser::{parse_components_str, ComponentIndex};
///
/// let json = r#"[{"identifier": "org.test:lib", "classes": ["org.test.Lib"]}]"#;
/// let index = ComponentIndex::new(parse_components_str(json).unwrap());
///
/// assert!(index.get("org.test:lib").is_some());
/// assert!(index.get("org.test:ghost").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    by_identifier: HashMap<String, Component>,
}

impl ComponentIndex {
    /// Builds an index from a parsed component list.
    pub fn new(components: Vec<Component>) -> Self {
        let by_identifier = components
            .into_iter()
            .map(|c| (c.identifier.clone(), c))
            .collect();
        Self { by_identifier }
    }

    /// Looks up the record for a normalized identifier.
    pub fn get(&self, identifier: &str) -> Option<&Component> {
        self.by_identifier.get(identifier)
    }

    /// Returns the number of indexed records.
    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    /// Returns true if the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }
}

/// Parses a component list from a JSON string.
pub fn parse_components_str(content: &str) -> ParseResult<Vec<Component>> {
    let components: Vec<Component> = serde_json::from_str(content)?;
    Ok(components)
}

/// Parses a component list from a file path.
pub fn parse_components_file(path: &Path) -> ParseResult<Vec<Component>> {
    let content = fs::read_to_string(path)?;
    parse_components_str(&content)
}

/// Parses a used-classes report from a JSON string and collapses it to the
/// set of referenced class names.
///
/// # Example
///
/// ```
/// use depscope::parser::parse_used_classes_str;
///
/// let json = r#"[
///     {"class": "com.foo.Bar", "variants": ["main"]},
///     {"class": "com.foo.Bar", "variants": ["debug"]},
///     {"class": "com.foo.Baz"}
/// ]"#;
/// let classes = parse_used_classes_str(json).unwrap();
/// assert_eq!(classes.len(), 2);
/// ```
pub fn parse_used_classes_str(content: &str) -> ParseResult<BTreeSet<String>> {
    let entries: Vec<UsedClass> = serde_json::from_str(content)?;
    Ok(entries.into_iter().map(|u| u.class_name).collect())
}

/// Parses a used-classes report from a file path.
pub fn parse_used_classes_file(path: &Path) -> ParseResult<BTreeSet<String>> {
    let content = fs::read_to_string(path)?;
    parse_used_classes_str(&content)
}
