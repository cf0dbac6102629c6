//! Project plan template update builder.

use serde::Serialize;
use gnc_core::entities::{ProjectPlanTemplate, Section};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectPlanTemplateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Replaces the template's section list. The section map is not touched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl ProjectPlanTemplateUpdate {
    pub(crate) fn apply(self, target: &mut ProjectPlanTemplate) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(version) = self.version {
            target.version = version;
        }
        if let Some(sections) = self.sections {
            target.sections = sections;
        }
    }
}

pub struct ProjectPlanTemplateUpdateBuilder(ProjectPlanTemplateUpdate);

impl ProjectPlanTemplateUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectPlanTemplateUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.0.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn sections(mut self, sections: Vec<Section>) -> Self {
        self.0.sections = Some(sections);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectPlanTemplateUpdate {
        self.0
    }
}
