//! File structure update builder.

use serde::Serialize;
use gnc_core::entities::FileStructure;
use gnc_core::enums::FileType;

#[derive(Debug, Clone, Default, Serialize)]
pub struct FileStructureUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl FileStructureUpdate {
    pub(crate) fn apply(self, target: &mut FileStructure) {
        if let Some(path) = self.path {
            target.path = path;
        }
        if let Some(file_type) = self.file_type {
            target.file_type = file_type;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(read_only) = self.read_only {
            target.read_only = read_only;
        }
    }
}

pub struct FileStructureUpdateBuilder(FileStructureUpdate);

impl FileStructureUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(FileStructureUpdate::default())
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.0.path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn file_type(mut self, file_type: FileType) -> Self {
        self.0.file_type = Some(file_type);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn read_only(mut self, read_only: bool) -> Self {
        self.0.read_only = Some(read_only);
        self
    }

    #[must_use]
    pub fn build(self) -> FileStructureUpdate {
        self.0
    }
}
