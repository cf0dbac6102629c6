//! Tech stack update builder.

use serde::Serialize;
use gnc_core::entities::TechStack;
use gnc_core::enums::TechCategory;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TechStackUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TechCategory>,
}

impl TechStackUpdate {
    pub(crate) fn apply(self, target: &mut TechStack) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(version) = self.version {
            target.version = version;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(category) = self.category {
            target.category = category;
        }
    }
}

pub struct TechStackUpdateBuilder(TechStackUpdate);

impl TechStackUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TechStackUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.0.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: TechCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn build(self) -> TechStackUpdate {
        self.0
    }
}
