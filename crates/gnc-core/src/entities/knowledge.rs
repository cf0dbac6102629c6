use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{KnowledgeCategory, KnowledgePriority};

/// A knowledge management practice.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KnowledgeManagement {
    pub id: String,
    pub practice: String,
    pub description: String,
    pub category: KnowledgeCategory,
    pub priority: KnowledgePriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a new knowledge entry.
///
/// `category` and `priority` are tags. When omitted they are inferred once,
/// at creation, from keywords in `practice`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateKnowledgeEntry {
    pub practice: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<KnowledgeCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<KnowledgePriority>,
}

impl CreateKnowledgeEntry {
    #[must_use]
    pub fn new(practice: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            practice: practice.into(),
            description: description.into(),
            category: None,
            priority: None,
        }
    }

    #[must_use]
    pub const fn category(mut self, category: KnowledgeCategory) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: KnowledgePriority) -> Self {
        self.priority = Some(priority);
        self
    }
}
