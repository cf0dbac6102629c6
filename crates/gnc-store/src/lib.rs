//! # gnc-store
//!
//! In-memory repositories for the Game Night Central project plan.
//!
//! Six repository services hold the documented plan entities (tech stack,
//! file structure, learning strategies, knowledge practices, database/auth
//! plan, next steps). [`plan::ProjectPlanService`] owns project plan
//! templates and their sections and composes the read model handed to
//! agents.
//!
//! Services start empty. Defaults are loaded by an explicit
//! `initialize()`, either per service or for all six through
//! [`Repositories::initialize`].

pub mod error;
pub mod plan;
pub mod relations;
pub mod repos;
pub mod seed;
pub mod store;
mod test_support;
pub mod updates;

use gnc_config::StoreConfig;
use serde::Serialize;
use tracing::debug;

use repos::database_auth_plan::DatabaseAuthPlanService;
use repos::file_structure::FileStructureService;
use repos::knowledge::KnowledgeService;
use repos::learning_strategy::LearningStrategyService;
use repos::next_steps::NextStepsService;
use repos::tech_stack::TechStackService;

/// Records created by one seeding pass, per repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedCounts {
    pub tech_stack: usize,
    pub file_structures: usize,
    pub learning_strategies: usize,
    pub knowledge: usize,
    pub database_auth_plans: usize,
    pub next_steps: usize,
}

impl SeedCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.tech_stack
            + self.file_structures
            + self.learning_strategies
            + self.knowledge
            + self.database_auth_plans
            + self.next_steps
    }
}

/// All six repository services, for injection into callers.
#[derive(Debug, Clone, Default)]
pub struct Repositories {
    pub tech_stack: TechStackService,
    pub file_structures: FileStructureService,
    pub learning_strategies: LearningStrategyService,
    pub knowledge: KnowledgeService,
    pub database_auth_plans: DatabaseAuthPlanService,
    pub next_steps: NextStepsService,
}

impl Repositories {
    /// Six empty services.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the services and seed them when `config.seed_defaults` is set.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        let mut repos = Self::new();
        if config.seed_defaults {
            repos.initialize();
        }
        repos
    }

    /// Seed every service that has not been seeded yet.
    pub fn initialize(&mut self) -> SeedCounts {
        let counts = SeedCounts {
            tech_stack: self.tech_stack.initialize(),
            file_structures: self.file_structures.initialize(),
            learning_strategies: self.learning_strategies.initialize(),
            knowledge: self.knowledge.initialize(),
            database_auth_plans: self.database_auth_plans.initialize(),
            next_steps: self.next_steps.initialize(),
        };
        debug!(total = counts.total(), "initialized repositories");
        counts
    }

    /// Clear and re-seed every service.
    pub fn reset(&mut self) -> SeedCounts {
        SeedCounts {
            tech_stack: self.tech_stack.reset(),
            file_structures: self.file_structures.reset(),
            learning_strategies: self.learning_strategies.reset(),
            knowledge: self.knowledge.reset(),
            database_auth_plans: self.database_auth_plans.reset(),
            next_steps: self.next_steps.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initialize_is_idempotent() {
        let mut repos = Repositories::new();
        let first = repos.initialize();
        assert_eq!(
            first,
            SeedCounts {
                tech_stack: 6,
                file_structures: 9,
                learning_strategies: 4,
                knowledge: 8,
                database_auth_plans: 1,
                next_steps: 8,
            }
        );
        assert_eq!(repos.initialize().total(), 0);
        assert_eq!(repos.reset(), first);
        assert_eq!(repos.tech_stack.len(), 6);
    }

    #[test]
    fn from_config_respects_seed_flag() {
        let seeded = Repositories::from_config(&StoreConfig::default());
        assert_eq!(seeded.knowledge.len(), 8);

        let empty = Repositories::from_config(&StoreConfig {
            seed_defaults: false,
            ..StoreConfig::default()
        });
        assert!(empty.knowledge.is_empty());
    }
}
