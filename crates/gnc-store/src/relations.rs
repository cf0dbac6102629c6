//! Related plan entities attached to every composed template.
//!
//! Templates do not reference their relations by ID. The composing service
//! holds one [`RelationSnapshot`] and attaches it to whichever template is
//! requested, so every template sees the same relations.

use chrono::{DateTime, Utc};
use gnc_core::entities::{
    DatabaseAuthPlan, FileStructure, KnowledgeManagement, LearningStrategy, NextSteps,
    ProjectPlanTemplate, ProjectPlanTemplateWithRelations, TechStack,
};
use gnc_core::enums::{
    FileType, ImplementationStatus, KnowledgeCategory, KnowledgePriority, NextStepsPriority,
    TechCategory,
};

use crate::Repositories;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSnapshot {
    pub tech_stack: Option<TechStack>,
    pub file_structures: Vec<FileStructure>,
    pub learning_strategy: Option<LearningStrategy>,
    pub knowledge_management: Option<KnowledgeManagement>,
    pub database_auth_plan: Option<DatabaseAuthPlan>,
    pub next_steps: Vec<NextSteps>,
}

impl Default for RelationSnapshot {
    fn default() -> Self {
        Self::placeholder_at(Utc::now())
    }
}

impl RelationSnapshot {
    /// The fixed placeholder relations, all stamped with `at`.
    #[must_use]
    pub fn placeholder_at(at: DateTime<Utc>) -> Self {
        Self {
            tech_stack: Some(TechStack {
                id: "default-tech-stack".into(),
                name: "Next.js".into(),
                version: "15+".into(),
                description: "React framework for production".into(),
                category: TechCategory::Framework,
                created_at: at,
                updated_at: at,
            }),
            file_structures: vec![FileStructure {
                id: "default-file-structure-1".into(),
                path: "src/".into(),
                file_type: FileType::Directory,
                description: "Main source code directory".into(),
                read_only: false,
                created_at: at,
                updated_at: at,
            }],
            learning_strategy: Some(LearningStrategy {
                id: "default-learning-strategy".into(),
                goal: "Learn new technologies".into(),
                steps: vec!["Research".into(), "Practice".into(), "Document".into()],
                created_at: at,
                updated_at: at,
            }),
            knowledge_management: Some(KnowledgeManagement {
                id: "default-knowledge-management".into(),
                practice: "Markdown Documentation".into(),
                description: "Use markdown format for all documentation".into(),
                category: KnowledgeCategory::Documentation,
                priority: KnowledgePriority::Low,
                created_at: at,
                updated_at: at,
            }),
            database_auth_plan: Some(DatabaseAuthPlan {
                id: "default-database-auth-plan".into(),
                status: ImplementationStatus::Implemented,
                features: vec!["Authentication".into(), "Database".into(), "Security".into()],
                created_at: at,
                updated_at: at,
            }),
            next_steps: vec![NextSteps {
                id: "default-next-step-1".into(),
                step: "Load project documentation".into(),
                priority: NextStepsPriority::Urgent.value(),
                created_at: at,
                updated_at: at,
            }],
        }
    }

    /// Snapshot the live repositories.
    ///
    /// Single-valued relations take the first entry in insertion order. File
    /// structures are all included; next steps are ordered by priority.
    #[must_use]
    pub fn from_repositories(repos: &Repositories) -> Self {
        Self {
            tech_stack: repos.tech_stack.list_tech_stack().into_iter().next(),
            file_structures: repos.file_structures.list_file_structures(),
            learning_strategy: repos
                .learning_strategies
                .list_learning_strategies()
                .into_iter()
                .next(),
            knowledge_management: repos.knowledge.list_knowledge_entries().into_iter().next(),
            database_auth_plan: repos
                .database_auth_plans
                .list_database_auth_plans()
                .into_iter()
                .next(),
            next_steps: repos.next_steps.get_next_steps_by_priority(),
        }
    }

    #[must_use]
    pub fn attach(&self, template: ProjectPlanTemplate) -> ProjectPlanTemplateWithRelations {
        ProjectPlanTemplateWithRelations {
            template,
            tech_stack: self.tech_stack.clone(),
            file_structures: self.file_structures.clone(),
            learning_strategy: self.learning_strategy.clone(),
            knowledge_management: self.knowledge_management.clone(),
            database_auth_plan: self.database_auth_plan.clone(),
            next_steps: self.next_steps.clone(),
        }
    }
}
