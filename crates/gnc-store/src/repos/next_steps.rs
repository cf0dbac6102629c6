//! Next steps repository.

use std::cmp::Ordering;

use chrono::Utc;
use gnc_core::entities::{CreateNextStep, NextSteps};
use gnc_core::enums::NextStepsPriority;
use gnc_core::ids::PREFIX_NEXT_STEP;
use gnc_core::search::{Filter, SearchOptions, SortKey, TimeRange, by_created_at, by_updated_at};
use gnc_core::validation::ValidationErrors;
use tracing::debug;

use crate::error::StoreError;
use crate::repos::{rejected, seed_with};
use crate::seed;
use crate::store::MemoryStore;
use crate::updates::next_steps::NextStepUpdate;

const ENTITY: &str = "next_steps";

#[derive(Debug, Clone, Default)]
pub struct NextStepsFilter {
    pub priority: Option<i32>,
    /// Inclusive lower bound on the priority value.
    pub min_priority: Option<i32>,
    /// Inclusive upper bound on the priority value.
    pub max_priority: Option<i32>,
    pub time: TimeRange,
}

impl Filter<NextSteps> for NextStepsFilter {
    fn matches(&self, item: &NextSteps) -> bool {
        self.priority.is_none_or(|p| item.priority == p)
            && self.min_priority.is_none_or(|p| item.priority >= p)
            && self.max_priority.is_none_or(|p| item.priority <= p)
            && self.time.contains(item)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NextStepsSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Priority,
    Step,
}

impl SortKey<NextSteps> for NextStepsSort {
    fn compare(self, a: &NextSteps, b: &NextSteps) -> Ordering {
        match self {
            Self::CreatedAt => by_created_at(a, b),
            Self::UpdatedAt => by_updated_at(a, b),
            Self::Priority => a.priority.cmp(&b.priority),
            Self::Step => a.step.cmp(&b.step),
        }
    }
}

pub type NextStepsSearch = SearchOptions<NextStepsFilter, NextStepsSort>;

fn validate(step: &str, priority: i32) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require_text("step", "Step", step);
    if NextStepsPriority::from_value(priority).is_none() {
        errors.push(
            "priority",
            format!("Priority must be between 1 and 4, got {priority}"),
        );
    }
    errors.into_result()
}

#[derive(Debug, Clone)]
pub struct NextStepsService {
    store: MemoryStore<NextSteps>,
}

impl Default for NextStepsService {
    fn default() -> Self {
        Self::new()
    }
}

impl NextStepsService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(PREFIX_NEXT_STEP),
        }
    }

    pub fn initialize(&mut self) -> usize {
        if self.store.is_seeded() {
            return 0;
        }
        let created = seed_with(ENTITY, seed::next_steps(), |data| self.create_next_step(data));
        self.store.mark_seeded();
        created
    }

    pub fn reset(&mut self) -> usize {
        self.store.clear();
        self.initialize()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the step is blank or the priority
    /// is outside 1..=4.
    pub fn create_next_step(&mut self, data: CreateNextStep) -> Result<NextSteps, StoreError> {
        validate(&data.step, data.priority).map_err(|errors| rejected(ENTITY, errors))?;

        let now = Utc::now();
        let item = NextSteps {
            id: self.store.next_id(),
            step: data.step,
            priority: data.priority,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %item.id, priority = item.priority, "created next step");
        self.store.insert(item.clone());
        Ok(item)
    }

    #[must_use]
    pub fn get_next_step(&self, id: &str) -> Option<NextSteps> {
        self.store.get(id).cloned()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the merged record is invalid.
    pub fn update_next_step(
        &mut self,
        id: &str,
        update: NextStepUpdate,
    ) -> Result<Option<NextSteps>, StoreError> {
        self.store
            .update_with(
                id,
                |item| update.apply(item),
                |item| validate(&item.step, item.priority),
            )
            .map_err(|errors| rejected(ENTITY, errors))
    }

    pub fn delete_next_step(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            debug!(id, "deleted next step");
        }
        removed
    }

    #[must_use]
    pub fn search_next_steps(&self, options: &NextStepsSearch) -> Vec<NextSteps> {
        self.store.search(options)
    }

    #[must_use]
    pub fn list_next_steps(&self) -> Vec<NextSteps> {
        self.store.to_vec()
    }

    /// All steps, most urgent first. Equal priorities keep insertion order.
    #[must_use]
    pub fn get_next_steps_by_priority(&self) -> Vec<NextSteps> {
        let mut steps = self.store.to_vec();
        steps.sort_by_key(|step| step.priority);
        steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
