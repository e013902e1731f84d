//! DepScope - dependency graph analyzer for resolved build classpaths
//!
//! This crate turns a build tool's resolved dependency tree into a directed
//! graph of "who depends on what", annotated with per-node usage metadata
//! (declared classes, source files, constants, provider flags). The graph is
//! the substrate for higher-level analyses such as unused-dependency
//! detection.

pub mod builder;
pub mod export;
pub mod graph;
pub mod parser;
