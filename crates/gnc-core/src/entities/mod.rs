//! Entity structs for every documented plan object.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation. Each entity has a matching `Create*` DTO
//! carrying the caller-supplied fields; IDs and timestamps are always
//! assigned by the owning repository.

mod database_auth_plan;
mod file_structure;
mod knowledge;
mod learning_strategy;
mod next_steps;
mod project_plan;
mod section;
mod tech_stack;

pub use database_auth_plan::{CreateDatabaseAuthPlan, DatabaseAuthPlan};
pub use file_structure::{CreateFileStructure, FileStructure, FileStructureNode};
pub use knowledge::{CreateKnowledgeEntry, KnowledgeManagement};
pub use learning_strategy::{CreateLearningStrategy, LearningStrategy};
pub use next_steps::{CreateNextStep, NextSteps};
pub use project_plan::{
    CreateProjectPlanTemplate, ProjectPlanTemplate, ProjectPlanTemplateWithRelations,
};
pub use section::{CreateSection, Section, SectionWithSubsections};
pub use tech_stack::{CreateTechStack, TechStack};

macro_rules! impl_timestamped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::search::Timestamped for $ty {
                fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
                    self.created_at
                }

                fn updated_at(&self) -> chrono::DateTime<chrono::Utc> {
                    self.updated_at
                }
            }
        )+
    };
}

impl_timestamped!(
    DatabaseAuthPlan,
    FileStructure,
    KnowledgeManagement,
    LearningStrategy,
    NextSteps,
    ProjectPlanTemplate,
    Section,
    TechStack,
);
