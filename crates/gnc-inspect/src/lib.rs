//! # gnc-inspect
//!
//! Classifies paths in a project checkout as read-only or writable and
//! builds depth-bounded directory trees.
//!
//! This is the only `gnc` crate that touches the filesystem. Classification
//! is pattern-based and works for paths that do not exist yet; stat-based
//! lookups and trees report missing paths as `None` or an error.

pub mod describe;
pub mod error;
pub mod inspector;
pub mod rules;

pub use error::InspectError;
pub use inspector::{CacheStats, FileStructureInspector, StructureReport};
pub use rules::{ReadOnlyRules, ReadOnlyStatus};
