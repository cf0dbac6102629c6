use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FileType;

/// A documented path in the project tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileStructure {
    pub id: String,
    /// Project-relative path; directories conventionally end with `/`.
    pub path: String,
    pub file_type: FileType,
    pub description: String,
    /// Agents must not modify read-only paths.
    pub read_only: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateFileStructure {
    pub path: String,
    pub file_type: FileType,
    pub description: String,
    pub read_only: bool,
}

impl CreateFileStructure {
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        file_type: FileType,
        description: impl Into<String>,
        read_only: bool,
    ) -> Self {
        Self {
            path: path.into(),
            file_type,
            description: description.into(),
            read_only,
        }
    }
}

/// A [`FileStructure`] placed in a rendered directory tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileStructureNode {
    #[serde(flatten)]
    pub entry: FileStructure,
    pub children: Vec<FileStructureNode>,
    /// Zero for entries directly under the tree root.
    pub depth: usize,
    pub expanded: bool,
}
