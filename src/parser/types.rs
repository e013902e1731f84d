//! Shared types for input parsing.
//!
//! This module defines the data structures produced by the earlier pipeline
//! stages that depscope consumes: the component-description records and the
//! used-classes report.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A source file descriptor declared by a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file within the artifact.
    pub path: String,

    /// Fully qualified name of the class the file compiles to.
    pub fqcn: String,
}

/// Per-dependency metadata produced by the component analysis stage.
///
/// One record per dependency identity. Every payload field is optional in
/// the serialized form and defaults to empty/false.
///
/// # Example
///
/// ```
/// use depscope::parser::Component;
///
/// let json = r#"{"identifier": "org.test:lib", "classes": ["org.test.Lib"]}"#;
/// let component: Component = serde_json::from_str(json).unwrap();
/// assert_eq!(component.identifier, "org.test:lib");
/// assert!(!component.security_provider);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Component {
    /// Normalized dependency identifier this record describes.
    pub identifier: String,

    /// Class names the dependency declares.
    #[serde(default)]
    pub classes: BTreeSet<String>,

    /// Source file descriptors the dependency declares.
    #[serde(default)]
    pub source_files: Vec<SourceFile>,

    /// Constant names the dependency declares, grouped by declaring type.
    #[serde(default)]
    pub constant_fields: BTreeMap<String, BTreeSet<String>>,

    /// Whether the dependency only contributes annotations with
    /// compile-time retention.
    #[serde(default)]
    pub compile_only_annotations: bool,

    /// Whether the dependency registers a security provider.
    #[serde(default)]
    pub security_provider: bool,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} classes)", self.identifier, self.classes.len())
    }
}

/// One entry of the used-classes report: a class the project references,
/// with the variants it was seen in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsedClass {
    /// Fully qualified class name.
    #[serde(rename = "class")]
    pub class_name: String,

    /// Variants (e.g. "main", "debug") in which the usage was observed.
    #[serde(default)]
    pub variants: Vec<String>,
}
