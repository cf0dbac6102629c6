//! Knowledge entry update builder.

use serde::Serialize;
use gnc_core::entities::KnowledgeManagement;
use gnc_core::enums::{KnowledgeCategory, KnowledgePriority};

/// Changing `practice` does not re-derive the category or priority tags;
/// set them explicitly if they should change too.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KnowledgeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<KnowledgeCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<KnowledgePriority>,
}

impl KnowledgeUpdate {
    pub(crate) fn apply(self, target: &mut KnowledgeManagement) {
        if let Some(practice) = self.practice {
            target.practice = practice;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(category) = self.category {
            target.category = category;
        }
        if let Some(priority) = self.priority {
            target.priority = priority;
        }
    }
}

pub struct KnowledgeUpdateBuilder(KnowledgeUpdate);

impl KnowledgeUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(KnowledgeUpdate::default())
    }

    #[must_use]
    pub fn practice(mut self, practice: impl Into<String>) -> Self {
        self.0.practice = Some(practice.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: KnowledgeCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: KnowledgePriority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn build(self) -> KnowledgeUpdate {
        self.0
    }
}
