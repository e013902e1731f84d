//! Parsers for the inputs depscope consumes.
//!
//! The graph builder treats its inputs as opaque contracts produced by
//! earlier pipeline stages:
//!
//! - the **resolution result**: the build tool's resolved dependency tree,
//! - the **component index**: per-dependency metadata records,
//! - the **used-classes report**: classes the project itself references.
//!
//! All three arrive as JSON files.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use depscope::parser::{parse_components_file, parse_resolution_file, ComponentIndex};
//!
//! let root = parse_resolution_file(Path::new("resolution.json")).unwrap();
//! let index = ComponentIndex::new(parse_components_file(Path::new("components.json")).unwrap());
//!
//! println!("resolved root: {}, {} components", root.id, index.len());
//! ```

pub mod components;
pub mod resolution;
pub mod types;

// Re-export commonly used types for convenience
pub use components::{
    parse_components_file, parse_components_str, parse_used_classes_file, parse_used_classes_str,
    ComponentIndex, ParseError, ParseResult,
};

pub use resolution::{
    parse_resolution_file, parse_resolution_str, ComponentIdentity, IdentityError,
    ResolvedComponent,
};

pub use types::{Component, SourceFile, UsedClass};
