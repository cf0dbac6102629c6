use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A markdown section of a project plan template.
///
/// `parent_id` allows arbitrary nesting in the model, but only one level of
/// grouping is materialized (see [`SectionWithSubsections`]).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Display order. Not unique.
    pub order: i32,
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateSection {
    pub title: String,
    pub content: String,
    pub order: i32,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl CreateSection {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, order: i32) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            order,
            parent_id: None,
        }
    }

    #[must_use]
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// A top-level section with its direct children.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionWithSubsections {
    #[serde(flatten)]
    pub section: Section,
    pub subsections: Vec<Section>,
}
