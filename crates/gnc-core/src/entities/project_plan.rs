use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    DatabaseAuthPlan, FileStructure, KnowledgeManagement, LearningStrategy, NextSteps, Section,
    TechStack,
};

/// The project plan document an agent reads before working on the project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectPlanTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub version: String,
    pub sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateProjectPlanTemplate {
    pub title: String,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl CreateProjectPlanTemplate {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            version: version.into(),
            sections: Vec::new(),
        }
    }
}

/// Read model: a template joined with its related plan entities.
///
/// The relations are not foreign keys; they are whatever relation snapshot
/// the composing service holds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectPlanTemplateWithRelations {
    #[serde(flatten)]
    pub template: ProjectPlanTemplate,
    pub tech_stack: Option<TechStack>,
    pub file_structures: Vec<FileStructure>,
    pub learning_strategy: Option<LearningStrategy>,
    pub knowledge_management: Option<KnowledgeManagement>,
    pub database_auth_plan: Option<DatabaseAuthPlan>,
    pub next_steps: Vec<NextSteps>,
}
